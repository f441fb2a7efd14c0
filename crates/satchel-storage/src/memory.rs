//! 인메모리 키-값 저장소.
//!
//! 프로세스 수명 동안만 유지된다. 테스트와 임시 세션에서 사용.

use async_trait::async_trait;
use parking_lot::RwLock;
use satchel_core::error::CoreError;
use satchel_core::ports::kv_store::KeyValueStore;
use std::collections::BTreeMap;

/// `BTreeMap` 기반 키-값 저장소
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 항목으로 생성
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.items.read().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        self.items.write().remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.items.read().keys().cloned().collect())
    }
}
