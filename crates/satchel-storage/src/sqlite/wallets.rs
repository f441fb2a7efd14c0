//! 지갑 목록 (WalletDirectory 포트 구현).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use satchel_core::error::CoreError;
use satchel_core::models::wallet::WalletSummary;
use satchel_core::ports::wallets::WalletDirectory;
use tracing::info;
use uuid::Uuid;

use super::SqliteStore;

impl SqliteStore {
    /// 지갑 추가
    pub fn add_wallet(&self, label: &str) -> Result<WalletSummary, CoreError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(CoreError::Validation {
                field: "label".to_string(),
                message: "빈 라벨".to_string(),
            });
        }

        let wallet = WalletSummary::new(label);
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO wallets (id, label, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                wallet.id.to_string(),
                wallet.label,
                wallet.created_at.to_rfc3339()
            ],
        )
        .map_err(|e| CoreError::Storage(format!("지갑 저장 실패: {e}")))?;

        info!("지갑 추가: {} ({})", wallet.label, wallet.id);
        Ok(wallet)
    }

    /// 지갑 삭제
    pub fn remove_wallet(&self, id: Uuid) -> Result<(), CoreError> {
        let conn = self.lock()?;
        let removed = conn
            .execute(
                "DELETE FROM wallets WHERE id = ?1",
                rusqlite::params![id.to_string()],
            )
            .map_err(|e| CoreError::Storage(format!("지갑 삭제 실패: {e}")))?;

        if removed == 0 {
            return Err(CoreError::NotFound {
                resource_type: "Wallet".to_string(),
                id: id.to_string(),
            });
        }

        info!("지갑 삭제: {id}");
        Ok(())
    }

    fn parse_wallet_row(
        id: String,
        label: String,
        created_at: String,
    ) -> Result<WalletSummary, CoreError> {
        let id = Uuid::parse_str(&id)
            .map_err(|e| CoreError::Storage(format!("지갑 ID 파싱 실패 ({id}): {e}")))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| CoreError::Storage(format!("생성 시각 파싱 실패: {e}")))?
            .with_timezone(&Utc);

        Ok(WalletSummary {
            id,
            label,
            created_at,
        })
    }
}

#[async_trait]
impl WalletDirectory for SqliteStore {
    async fn wallet_count(&self) -> Result<usize, CoreError> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM wallets", [], |row| row.get(0))
            .map_err(|e| CoreError::Storage(format!("지갑 수 조회 실패: {e}")))?;
        Ok(count.max(0) as usize)
    }

    async fn list_wallets(&self) -> Result<Vec<WalletSummary>, CoreError> {
        let rows = {
            let conn = self.lock()?;
            let mut stmt = conn
                .prepare("SELECT id, label, created_at FROM wallets ORDER BY created_at, rowid")
                .map_err(|e| CoreError::Storage(format!("쿼리 준비 실패: {e}")))?;

            let rows = stmt
                .query_map([], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                })
                .map_err(|e| CoreError::Storage(format!("지갑 목록 조회 실패: {e}")))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| CoreError::Storage(format!("지갑 목록 변환 실패: {e}")))?;
            rows
        };

        rows.into_iter()
            .map(|(id, label, created_at)| Self::parse_wallet_row(id, label, created_at))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_list_remove() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.wallet_count().await.unwrap(), 0);

        let first = store.add_wallet("Spending").unwrap();
        let second = store.add_wallet("Cold storage").unwrap();
        assert_eq!(store.wallet_count().await.unwrap(), 2);

        let wallets = store.list_wallets().await.unwrap();
        assert_eq!(wallets.len(), 2);
        assert_eq!(wallets[0].id, first.id);
        assert_eq!(wallets[1].label, "Cold storage");

        store.remove_wallet(second.id).unwrap();
        assert_eq!(store.wallet_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn remove_unknown_wallet_is_not_found() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = store.remove_wallet(Uuid::new_v4());
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn blank_label_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(
            store.add_wallet("   "),
            Err(CoreError::Validation { .. })
        ));
    }
}
