//! 일반 설정 화면 항목 구성.
//!
//! 패널 상태에서 표시할 행 목록을 만드는 순수 함수와 렌더 결과 타입.
//! 조건부 항목:
//! - 기본 지갑(실행 시 화면) 이동: 지갑이 2개 이상일 때만
//! - 핸드오프 토글과 설명: 핸드오프 지원 플랫폼에서만 (비활성 표시 없이 아예 생략)

use satchel_core::models::platform::PlatformFamily;
use satchel_core::models::route::Route;
use satchel_core::models::setting::{SettingKey, ToggleSetting};
use satchel_core::ports::text::{TextKey, TextProvider};
use std::collections::HashMap;

/// 화면에 그릴 한 줄
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// 하위 화면 이동 (chevron)
    Navigation {
        route: Route,
        title: String,
        test_id: Option<&'static str>,
    },
    /// 스위치
    Toggle {
        key: SettingKey,
        title: String,
        value: bool,
        /// 저장 확인 대기 중
        pending: bool,
        test_id: Option<&'static str>,
    },
    /// 설명 문구
    Caption { text: String },
}

impl Row {
    /// 사용자가 조작할 수 있는 행인지 (설명 문구 제외)
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Row::Caption { .. })
    }
}

/// 패널 렌더 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// 최초 조회 중
    Loading { label: String },
    /// 조회 완료
    Ready { rows: Vec<Row> },
}

impl PanelView {
    pub fn rows(&self) -> &[Row] {
        match self {
            PanelView::Loading { .. } => &[],
            PanelView::Ready { rows } => rows,
        }
    }

    pub fn interactive_rows(&self) -> Vec<&Row> {
        self.rows().iter().filter(|r| r.is_interactive()).collect()
    }

    /// 토글 행의 표시 값
    pub fn toggle_value(&self, key: SettingKey) -> Option<bool> {
        self.rows().iter().find_map(|row| match row {
            Row::Toggle { key: k, value, .. } if *k == key => Some(*value),
            _ => None,
        })
    }

    pub fn has_route(&self, route: Route) -> bool {
        self.rows()
            .iter()
            .any(|row| matches!(row, Row::Navigation { route: r, .. } if *r == route))
    }
}

/// 사용자에게 보여줄 실패 안내
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelNotice {
    /// 마운트 시 조회 실패: 기본값(false) 사용
    FetchFailed { key: SettingKey, reason: String },
    /// 쓰기 실패: 확인된 값으로 롤백
    WriteFailed {
        key: SettingKey,
        attempted: bool,
        reason: String,
    },
}

impl PanelNotice {
    pub fn key(&self) -> SettingKey {
        match self {
            PanelNotice::FetchFailed { key, .. } | PanelNotice::WriteFailed { key, .. } => *key,
        }
    }

    /// 로컬라이즈된 안내 문구
    pub fn message(&self, text: &dyn TextProvider) -> String {
        let (headline, key) = match self {
            PanelNotice::FetchFailed { key, .. } => (text.lookup(TextKey::FetchFailed), key),
            PanelNotice::WriteFailed { key, .. } => (text.lookup(TextKey::WriteFailed), key),
        };
        format!("{} ({})", headline, text.lookup(title_key(*key)))
    }
}

/// 설정 키의 제목 문자열 키
pub fn title_key(key: SettingKey) -> TextKey {
    match key {
        SettingKey::AdvancedMode => TextKey::GeneralAdvMode,
        SettingKey::LegacyUrV1 => TextKey::LegacyUrV1,
        SettingKey::HandOff => TextKey::GeneralContinuity,
    }
}

/// 패널에서 추적하는 설정 키 (표시 순서)
pub fn tracked_keys(platform: PlatformFamily) -> Vec<SettingKey> {
    let mut keys = Vec::with_capacity(3);
    if platform.supports_hand_off() {
        keys.push(SettingKey::HandOff);
    }
    keys.push(SettingKey::AdvancedMode);
    keys.push(SettingKey::LegacyUrV1);
    keys
}

/// Ready 상태의 행 목록 구성
pub fn build_rows(
    platform: PlatformFamily,
    wallet_count: usize,
    settings: &HashMap<SettingKey, ToggleSetting>,
    text: &dyn TextProvider,
) -> Vec<Row> {
    let mut rows = Vec::with_capacity(8);

    if wallet_count > 1 {
        rows.push(Row::Navigation {
            route: Route::DefaultView,
            title: text.lookup(TextKey::DefaultTitle),
            test_id: None,
        });
    }

    rows.push(Row::Navigation {
        route: Route::SettingsPrivacy,
        title: text.lookup(TextKey::Privacy),
        test_id: Some("SettingsPrivacy"),
    });

    for key in tracked_keys(platform) {
        let (value, pending) = settings
            .get(&key)
            .map(|s| (s.value(), s.is_pending()))
            .unwrap_or((false, false));

        rows.push(Row::Toggle {
            key,
            title: text.lookup(title_key(key)),
            value,
            pending,
            test_id: match key {
                SettingKey::AdvancedMode => Some("AdvancedMode"),
                _ => None,
            },
        });

        match key {
            SettingKey::HandOff => rows.push(Row::Caption {
                text: text.lookup(TextKey::GeneralContinuityExplain),
            }),
            SettingKey::AdvancedMode => rows.push(Row::Caption {
                text: text.lookup(TextKey::GeneralAdvModeExplain),
            }),
            SettingKey::LegacyUrV1 => {}
        }
    }

    rows
}
