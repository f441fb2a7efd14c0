//! # satchel-core
//!
//! Satchel 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 설정 키, 플랫폼, 라우트, 지갑 요약
//! - [`ports`]: Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 애플리케이션 설정 구조체
//! - [`config_manager`]: 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::setting::SettingKey;

    #[test]
    fn setting_key_serde_roundtrip() {
        let json = serde_json::to_string(&SettingKey::LegacyUrV1).unwrap();
        assert_eq!(json, "\"legacy_ur_v1\"");
        let key: SettingKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, SettingKey::LegacyUrV1);
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.storage.db_file_name, "satchel.db");
        assert_eq!(config.panel.fetch_timeout_ms, 5_000);
        assert_eq!(config.panel.write_retry_attempts, 1);
        assert!(config.ui.platform_override.is_none());
    }
}
