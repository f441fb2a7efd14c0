//! 설정 변경 이벤트.

use satchel_core::models::setting::SettingKey;
use uuid::Uuid;

/// `SettingsService` 구독자에게 전달되는 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// 플래그 쓰기 성공
    FlagChanged {
        key: SettingKey,
        value: bool,
        /// 쓰기를 요청한 주체 (None이면 외부)
        origin: Option<Uuid>,
    },
    /// 지갑 수 갱신
    WalletCountChanged(usize),
}
