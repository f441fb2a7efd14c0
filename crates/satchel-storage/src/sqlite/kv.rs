//! 키-값 저장 (KeyValueStore 포트 구현).

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::OptionalExtension;
use satchel_core::error::CoreError;
use satchel_core::ports::kv_store::KeyValueStore;
use tracing::debug;

use super::SqliteStore;

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let conn = self.lock()?;

        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            rusqlite::params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| CoreError::Storage(format!("키 조회 실패 ({key}): {e}")))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| CoreError::Storage(format!("키 저장 실패 ({key}): {e}")))?;

        debug!("키 저장: {key}");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        let conn = self.lock()?;

        let removed = conn
            .execute("DELETE FROM kv_store WHERE key = ?1", rusqlite::params![key])
            .map_err(|e| CoreError::Storage(format!("키 삭제 실패 ({key}): {e}")))?;

        debug!("키 삭제: {key} ({removed}건)");
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, CoreError> {
        let conn = self.lock()?;

        let mut stmt = conn
            .prepare("SELECT key FROM kv_store ORDER BY key")
            .map_err(|e| CoreError::Storage(format!("쿼리 준비 실패: {e}")))?;

        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| CoreError::Storage(format!("키 목록 조회 실패: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CoreError::Storage(format!("키 목록 변환 실패: {e}")))?;

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get_item("USE_UR_V1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_and_remove_deletes() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.set_item("HandOff", "1").await.unwrap();
        store.set_item("HandOff", "").await.unwrap();
        assert_eq!(store.get_item("HandOff").await.unwrap(), Some(String::new()));

        store.remove_item("HandOff").await.unwrap();
        assert_eq!(store.get_item("HandOff").await.unwrap(), None);

        // 없는 키 삭제도 성공
        store.remove_item("HandOff").await.unwrap();
    }

    #[tokio::test]
    async fn keys_are_sorted() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set_item("b", "1").await.unwrap();
        store.set_item("a", "1").await.unwrap();
        assert_eq!(store.keys().await.unwrap(), vec!["a", "b"]);
    }
}
