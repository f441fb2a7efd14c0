//! 플래그 포트 어댑터.
//!
//! 키-값 저장소 위에서 세 가지 플래그 계약을 구현한다.
//! 값이 존재하고 비어 있지 않으면 활성으로 본다.
//!
//! | 플래그 | 키 | 활성 | 비활성 |
//! |---|---|---|---|
//! | 고급 모드 | `advancedmodeenabled` | `"1"` | `""` |
//! | 레거시 URv1 | `USE_UR_V1` | `"1"` | 키 삭제 |
//! | 핸드오프 | `HandOff` | `"1"` | `""` |

use async_trait::async_trait;
use satchel_core::error::CoreError;
use satchel_core::models::setting::SettingKey;
use satchel_core::ports::flags::{AdvancedModeFlag, HandOffFlag, LegacyEncodingFlag};
use satchel_core::ports::kv_store::KeyValueStore;
use std::sync::Arc;
use tracing::debug;

const ENABLED_VALUE: &str = "1";
const DISABLED_VALUE: &str = "";

/// 키-값 저장소 기반 플래그 묶음
#[derive(Clone)]
pub struct StoredFlags {
    store: Arc<dyn KeyValueStore>,
}

impl StoredFlags {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn read_flag(&self, key: SettingKey) -> Result<bool, CoreError> {
        let value = self.store.get_item(key.storage_key()).await?;
        let enabled = value.is_some_and(|v| !v.is_empty());
        debug!("플래그 조회: {key} = {enabled}");
        Ok(enabled)
    }

    async fn write_flag(&self, key: SettingKey, enabled: bool) -> Result<(), CoreError> {
        let value = if enabled { ENABLED_VALUE } else { DISABLED_VALUE };
        self.store.set_item(key.storage_key(), value).await?;
        debug!("플래그 저장: {key} = {enabled}");
        Ok(())
    }
}

#[async_trait]
impl AdvancedModeFlag for StoredFlags {
    async fn is_enabled(&self) -> Result<bool, CoreError> {
        self.read_flag(SettingKey::AdvancedMode).await
    }

    async fn set_enabled(&self, enabled: bool) -> Result<(), CoreError> {
        self.write_flag(SettingKey::AdvancedMode, enabled).await
    }
}

#[async_trait]
impl LegacyEncodingFlag for StoredFlags {
    async fn is_enabled(&self) -> Result<bool, CoreError> {
        self.read_flag(SettingKey::LegacyUrV1).await
    }

    async fn enable(&self) -> Result<(), CoreError> {
        self.store
            .set_item(SettingKey::LegacyUrV1.storage_key(), ENABLED_VALUE)
            .await?;
        debug!("URv1 사용 설정");
        Ok(())
    }

    async fn disable(&self) -> Result<(), CoreError> {
        self.store
            .remove_item(SettingKey::LegacyUrV1.storage_key())
            .await?;
        debug!("URv1 사용 해제");
        Ok(())
    }
}

#[async_trait]
impl HandOffFlag for StoredFlags {
    async fn is_enabled(&self) -> Result<bool, CoreError> {
        self.read_flag(SettingKey::HandOff).await
    }

    async fn set_enabled(&self, enabled: bool) -> Result<(), CoreError> {
        self.write_flag(SettingKey::HandOff, enabled).await
    }
}
