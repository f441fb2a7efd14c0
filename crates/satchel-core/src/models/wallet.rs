//! 지갑 요약 모델.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 지갑 목록 표시용 요약 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSummary {
    /// 지갑 ID
    pub id: Uuid,
    /// 사용자 지정 라벨
    pub label: String,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
}

impl WalletSummary {
    /// 새 지갑 요약 생성 (ID, 생성 시각 자동 부여)
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            created_at: Utc::now(),
        }
    }
}
