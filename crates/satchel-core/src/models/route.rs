//! 설정 하위 화면 라우트.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 일반 설정 화면에서 이동할 수 있는 하위 화면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// 실행 시 기본 지갑 선택 화면
    DefaultView,
    /// 프라이버시 설정 화면
    SettingsPrivacy,
}

impl Route {
    /// 네비게이션 서비스에 전달되는 화면 이름
    pub fn screen_name(&self) -> &'static str {
        match self {
            Route::DefaultView => "DefaultView",
            Route::SettingsPrivacy => "SettingsPrivacy",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.screen_name())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DefaultView" | "default-view" | "default" => Ok(Route::DefaultView),
            "SettingsPrivacy" | "privacy" => Ok(Route::SettingsPrivacy),
            other => Err(CoreError::Validation {
                field: "route".to_string(),
                message: format!("알 수 없는 화면: {other}"),
            }),
        }
    }
}
