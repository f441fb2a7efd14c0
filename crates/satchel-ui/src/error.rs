//! 설정 화면 에러.

use satchel_core::models::setting::SettingKey;
use thiserror::Error;

/// 패널 연산 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// `mount()` 호출 전
    #[error("패널이 아직 마운트되지 않음")]
    NotMounted,

    /// 최초 조회가 끝나기 전 (로딩 중)
    #[error("설정을 불러오는 중")]
    NotReady,

    /// `unmount()` 이후
    #[error("패널이 언마운트됨")]
    Unmounted,

    /// 현재 플랫폼에서 표시되지 않는 항목
    #[error("이 플랫폼에서 표시되지 않는 설정: {0}")]
    Hidden(SettingKey),
}
