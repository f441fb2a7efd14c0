//! 지갑 목록 포트 (읽기 전용).
//!
//! 구현: `satchel-storage::sqlite::SqliteStore`

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::wallet::WalletSummary;

/// 지갑 디렉토리: 설정 화면은 개수만 사용한다
#[async_trait]
pub trait WalletDirectory: Send + Sync {
    /// 등록된 지갑 수
    async fn wallet_count(&self) -> Result<usize, CoreError>;

    /// 생성 순 지갑 목록
    async fn list_wallets(&self) -> Result<Vec<WalletSummary>, CoreError>;
}
