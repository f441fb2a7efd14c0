//! 불리언 설정 플래그 포트.
//!
//! 플래그마다 계약이 조금씩 다르다:
//! 레거시 인코딩은 `enable`/`disable` 쌍으로 쓰고, 나머지는 값을 직접 쓴다.
//!
//! 구현: `satchel-storage::flags::StoredFlags`

use async_trait::async_trait;

use crate::error::CoreError;

/// 고급 모드 플래그
#[async_trait]
pub trait AdvancedModeFlag: Send + Sync {
    async fn is_enabled(&self) -> Result<bool, CoreError>;

    async fn set_enabled(&self, enabled: bool) -> Result<(), CoreError>;
}

/// 레거시 URv1 QR 인코딩 플래그
#[async_trait]
pub trait LegacyEncodingFlag: Send + Sync {
    async fn is_enabled(&self) -> Result<bool, CoreError>;

    /// URv1 사용 설정
    async fn enable(&self) -> Result<(), CoreError>;

    /// URv1 사용 해제
    async fn disable(&self) -> Result<(), CoreError>;
}

/// 핸드오프(Continuity) 플래그
#[async_trait]
pub trait HandOffFlag: Send + Sync {
    async fn is_enabled(&self) -> Result<bool, CoreError>;

    async fn set_enabled(&self, enabled: bool) -> Result<(), CoreError>;
}
