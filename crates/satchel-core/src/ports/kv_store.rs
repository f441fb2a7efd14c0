//! 키-값 저장소 포트.
//!
//! 구현: `satchel-storage` crate (rusqlite, 인메모리)

use async_trait::async_trait;

use crate::error::CoreError;

/// 문자열 키-값 영속 저장소
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 값 조회 (없으면 None)
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// 값 저장 (있으면 덮어쓰기)
    async fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// 키 삭제 (없어도 성공)
    async fn remove_item(&self, key: &str) -> Result<(), CoreError>;

    /// 저장된 전체 키 (정렬됨)
    async fn keys(&self) -> Result<Vec<String>, CoreError>;
}
