//! 애플리케이션 설정 구조체.
//!
//! 저장소 파일, 설정 패널 타임아웃/재시도 정책, UI 로케일·플랫폼 오버라이드를 정의한다.
//! `ConfigManager`를 통해 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CoreError;
use crate::models::platform::PlatformFamily;

/// 재시도 횟수 상한
const MAX_WRITE_RETRY_ATTEMPTS: u32 = 5;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 로컬 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
    /// 설정 패널 동작
    #[serde(default)]
    pub panel: PanelConfig,
    /// UI 설정
    #[serde(default)]
    pub ui: UiConfig,
}

// ============================================================
// 저장소 설정
// ============================================================

/// 로컬 저장소 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite 파일 이름
    #[serde(default = "default_db_file_name")]
    pub db_file_name: String,
    /// 데이터 디렉토리 (None이면 플랫폼 기본 경로)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_file_name: default_db_file_name(),
            data_dir: None,
        }
    }
}

// ============================================================
// 패널 설정
// ============================================================

/// 설정 패널 동작: 조회 타임아웃, 쓰기 실패 재시도
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// 마운트 시 플래그 조회 타임아웃 (밀리초)
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
    /// 쓰기 실패 시 추가 재시도 횟수 (0이면 즉시 롤백)
    #[serde(default = "default_write_retry_attempts")]
    pub write_retry_attempts: u32,
    /// 재시도 간격 (밀리초)
    #[serde(default = "default_write_retry_backoff_ms")]
    pub write_retry_backoff_ms: u64,
}

impl PanelConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn write_retry_backoff(&self) -> Duration {
        Duration::from_millis(self.write_retry_backoff_ms)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: default_fetch_timeout_ms(),
            write_retry_attempts: default_write_retry_attempts(),
            write_retry_backoff_ms: default_write_retry_backoff_ms(),
        }
    }
}

// ============================================================
// UI 설정
// ============================================================

/// UI 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// 로케일 코드 ("ko", "en"). None이면 시스템 로케일 감지
    #[serde(default)]
    pub locale: Option<String>,
    /// 플랫폼 오버라이드 (조건부 항목 미리보기용)
    #[serde(default)]
    pub platform_override: Option<PlatformFamily>,
}

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            storage: StorageConfig::default(),
            panel: PanelConfig::default(),
            ui: UiConfig::default(),
        }
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage.db_file_name.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "storage.db_file_name".to_string(),
                message: "빈 파일 이름".to_string(),
            });
        }
        if self.panel.fetch_timeout_ms == 0 {
            return Err(CoreError::Validation {
                field: "panel.fetch_timeout_ms".to_string(),
                message: "0보다 커야 합니다".to_string(),
            });
        }
        if self.panel.write_retry_attempts > MAX_WRITE_RETRY_ATTEMPTS {
            return Err(CoreError::Validation {
                field: "panel.write_retry_attempts".to_string(),
                message: format!("최대 {MAX_WRITE_RETRY_ATTEMPTS}회"),
            });
        }
        if let Some(locale) = &self.ui.locale {
            if !matches!(locale.as_str(), "ko" | "en") {
                return Err(CoreError::Validation {
                    field: "ui.locale".to_string(),
                    message: format!("지원하지 않는 로케일: {locale}"),
                });
            }
        }
        Ok(())
    }
}

fn default_db_file_name() -> String {
    "satchel.db".to_string()
}

fn default_fetch_timeout_ms() -> u64 {
    5_000
}

fn default_write_retry_attempts() -> u32 {
    1
}

fn default_write_retry_backoff_ms() -> u64 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default_config().validate().is_ok());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"panel": {"fetch_timeout_ms": 750}}"#).unwrap();
        assert_eq!(config.panel.fetch_timeout_ms, 750);
        assert_eq!(config.panel.write_retry_attempts, 1);
        assert_eq!(config.storage.db_file_name, "satchel.db");
        assert_eq!(config.panel.fetch_timeout(), Duration::from_millis(750));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = AppConfig::default_config();
        config.panel.fetch_timeout_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(CoreError::Validation { field, .. }) if field == "panel.fetch_timeout_ms"
        ));
    }

    #[test]
    fn rejects_excessive_retries() {
        let mut config = AppConfig::default_config();
        config.panel.write_retry_attempts = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_locale() {
        let mut config = AppConfig::default_config();
        config.ui.locale = Some("fr".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn platform_override_serde() {
        let config: AppConfig =
            serde_json::from_str(r#"{"ui": {"platform_override": "ios"}}"#).unwrap();
        assert_eq!(config.ui.platform_override, Some(PlatformFamily::Ios));
    }
}
