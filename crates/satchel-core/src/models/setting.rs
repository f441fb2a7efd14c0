//! 토글 설정 모델.
//!
//! 화면에 표시되는 값은 두 단계로 관리한다:
//! `confirmed`(마지막으로 저장이 확인된 값)와 `pending`(아직 쓰기가 끝나지 않은 낙관적 값).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 설정 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// 고급 모드
    AdvancedMode,
    /// 레거시 URv1 QR 인코딩
    LegacyUrV1,
    /// 핸드오프 (iOS Continuity)
    HandOff,
}

impl SettingKey {
    /// 전체 설정 키 (표시 순서와 무관)
    pub const ALL: [SettingKey; 3] = [
        SettingKey::AdvancedMode,
        SettingKey::LegacyUrV1,
        SettingKey::HandOff,
    ];

    /// 키-값 저장소에 기록되는 키 이름
    pub fn storage_key(&self) -> &'static str {
        match self {
            SettingKey::AdvancedMode => "advancedmodeenabled",
            SettingKey::LegacyUrV1 => "USE_UR_V1",
            SettingKey::HandOff => "HandOff",
        }
    }

    /// CLI/로그용 식별자
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::AdvancedMode => "advanced-mode",
            SettingKey::LegacyUrV1 => "legacy-ur-v1",
            SettingKey::HandOff => "hand-off",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advanced-mode" | "advanced" => Ok(SettingKey::AdvancedMode),
            "legacy-ur-v1" | "urv1" => Ok(SettingKey::LegacyUrV1),
            "hand-off" | "handoff" => Ok(SettingKey::HandOff),
            other => Err(CoreError::Validation {
                field: "setting".to_string(),
                message: format!("알 수 없는 설정: {other}"),
            }),
        }
    }
}

/// 화면에 바인딩된 토글 하나의 상태
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSetting {
    /// 설정 키
    pub key: SettingKey,
    /// 저장이 확인된 값 (마운트 시 조회 결과 또는 완료된 쓰기)
    pub confirmed: bool,
    /// 쓰기 진행 중인 낙관적 값
    pub pending: Option<bool>,
    /// 최초 조회 전이면 true
    pub loading: bool,
}

impl ToggleSetting {
    /// 조회 전 상태로 생성
    pub fn loading(key: SettingKey) -> Self {
        Self {
            key,
            confirmed: false,
            pending: None,
            loading: true,
        }
    }

    /// 화면에 표시할 값
    pub fn value(&self) -> bool {
        self.pending.unwrap_or(self.confirmed)
    }

    /// 쓰기 확인 대기 중인지
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 조회 결과 반영 (loading 해제)
    pub fn resolve(&mut self, value: bool) {
        self.confirmed = value;
        self.loading = false;
    }
}
