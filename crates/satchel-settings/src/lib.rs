//! # satchel-settings
//!
//! 설정 서비스.
//! 여러 화면이 공유하는 플래그/지갑 데이터의 단일 소유 경계로,
//! 읽기·쓰기·구독 연산을 제공하고 화면에는 `Arc<SettingsService>`로 주입된다.
//!
//! ## 모듈
//! - `service`: `SettingsService`, `FlagSet`
//! - `event`: 변경 이벤트 (`SettingsEvent`)

pub mod event;
pub mod service;

pub use event::SettingsEvent;
pub use service::{FlagSet, SettingsService};
