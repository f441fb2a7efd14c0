//! # satchel-ui
//!
//! 툴킷에 독립적인 UI 크레이트.
//! 일반 설정 화면의 상태 머신(Loading → Ready), 낙관적 토글 쓰기,
//! 조건부 항목 구성, 화면 전환, 한국어/영어 문자열을 제공한다.
//! 실제 그리기는 호출 측(CLI 등)이 `PanelView`를 받아 처리한다.

pub mod error;
pub mod i18n;
pub mod navigation;
pub mod views;

pub use error::PanelError;
pub use i18n::{LocalizedText, Locale, Strings};
pub use navigation::RouteStack;
pub use views::general_settings::{GeneralSettingsPanel, PanelPhase, WriteOutcome, WriteTicket};
pub use views::rows::{PanelNotice, PanelView, Row};
