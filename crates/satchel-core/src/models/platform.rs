//! 실행 플랫폼 구분.
//!
//! 일부 설정 항목(핸드오프)은 특정 플랫폼 계열에서만 표시된다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 운영체제 계열
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Ios,
    Android,
    Macos,
    Windows,
    Linux,
    Other,
}

impl PlatformFamily {
    /// 컴파일 대상 기준 현재 플랫폼
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            PlatformFamily::Ios
        } else if cfg!(target_os = "android") {
            PlatformFamily::Android
        } else if cfg!(target_os = "macos") {
            PlatformFamily::Macos
        } else if cfg!(target_os = "windows") {
            PlatformFamily::Windows
        } else if cfg!(target_os = "linux") {
            PlatformFamily::Linux
        } else {
            PlatformFamily::Other
        }
    }

    /// 핸드오프(Continuity) 지원 여부: iOS 전용
    pub fn supports_hand_off(&self) -> bool {
        matches!(self, PlatformFamily::Ios)
    }

    /// 소문자 식별자
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::Ios => "ios",
            PlatformFamily::Android => "android",
            PlatformFamily::Macos => "macos",
            PlatformFamily::Windows => "windows",
            PlatformFamily::Linux => "linux",
            PlatformFamily::Other => "other",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformFamily {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(PlatformFamily::Ios),
            "android" => Ok(PlatformFamily::Android),
            "macos" => Ok(PlatformFamily::Macos),
            "windows" => Ok(PlatformFamily::Windows),
            "linux" => Ok(PlatformFamily::Linux),
            "other" => Ok(PlatformFamily::Other),
            other => Err(CoreError::Validation {
                field: "platform".to_string(),
                message: format!("알 수 없는 플랫폼: {other}"),
            }),
        }
    }
}
