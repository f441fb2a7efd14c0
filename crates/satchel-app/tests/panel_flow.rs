//! 설정 화면 통합 테스트.
//!
//! SQLite 저장소 → 플래그 어댑터 → 설정 서비스 → 일반 설정 화면 전체 흐름.

use async_trait::async_trait;
use satchel_core::error::CoreError;
use satchel_core::models::platform::PlatformFamily;
use satchel_core::models::route::Route;
use satchel_core::models::setting::SettingKey;
use satchel_core::config::PanelConfig;
use satchel_core::ports::kv_store::KeyValueStore;
use satchel_settings::{FlagSet, SettingsService};
use satchel_storage::flags::StoredFlags;
use satchel_storage::memory::MemoryKeyValueStore;
use satchel_storage::sqlite::SqliteStore;
use satchel_ui::{
    GeneralSettingsPanel, LocalizedText, Locale, PanelNotice, PanelPhase, RouteStack, Row,
    WriteOutcome,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    store: Arc<SqliteStore>,
    service: Arc<SettingsService>,
    navigator: Arc<RouteStack>,
}

impl Harness {
    fn new() -> Self {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let flags = Arc::new(StoredFlags::new(store.clone()));
        let service = Arc::new(SettingsService::new(
            FlagSet::from_shared(flags),
            store.clone(),
        ));
        Self {
            store,
            service,
            navigator: Arc::new(RouteStack::new()),
        }
    }

    fn panel(&self, platform: PlatformFamily) -> GeneralSettingsPanel {
        GeneralSettingsPanel::new(
            self.service.clone(),
            self.navigator.clone(),
            Arc::new(LocalizedText::new(Locale::En)),
            platform,
            PanelConfig {
                fetch_timeout_ms: 1_000,
                write_retry_attempts: 1,
                write_retry_backoff_ms: 1,
            },
        )
    }
}

async fn eventually(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("조건이 시간 내에 충족되지 않음");
}

#[tokio::test]
async fn single_wallet_shows_three_interactive_rows() {
    let h = Harness::new();
    h.store.add_wallet("Main").unwrap();
    h.store.set_item("advancedmodeenabled", "1").await.unwrap();

    let panel = h.panel(PlatformFamily::Android);
    assert_eq!(panel.mount().await.unwrap(), PanelPhase::Ready);

    let view = panel.view();
    let interactive = view.interactive_rows();
    assert_eq!(interactive.len(), 3);
    assert!(matches!(interactive[0], Row::Navigation { route: Route::SettingsPrivacy, .. }));
    assert_eq!(view.toggle_value(SettingKey::AdvancedMode), Some(true));
    assert_eq!(view.toggle_value(SettingKey::LegacyUrV1), Some(false));
    assert_eq!(view.toggle_value(SettingKey::HandOff), None);
}

#[tokio::test]
async fn default_wallet_row_needs_two_wallets() {
    let h = Harness::new();
    h.store.add_wallet("Main").unwrap();
    h.store.add_wallet("Savings").unwrap();

    let panel = h.panel(PlatformFamily::Linux);
    panel.mount().await.unwrap();

    let view = panel.view();
    assert!(matches!(view.rows()[0], Row::Navigation { route: Route::DefaultView, .. }));
    assert_eq!(view.interactive_rows().len(), 4);

    panel.navigate(Route::DefaultView).unwrap();
    assert_eq!(h.navigator.current(), Some(Route::DefaultView));
}

#[tokio::test]
async fn legacy_flag_writes_and_removes_key() {
    let h = Harness::new();
    let panel = h.panel(PlatformFamily::Android);
    panel.mount().await.unwrap();

    let ticket = panel.toggle(SettingKey::LegacyUrV1, true).unwrap();
    assert_eq!(ticket.wait().await, WriteOutcome::Confirmed);
    assert_eq!(h.store.get_item("USE_UR_V1").await.unwrap().as_deref(), Some("1"));

    let ticket = panel.toggle(SettingKey::LegacyUrV1, false).unwrap();
    assert_eq!(ticket.wait().await, WriteOutcome::Confirmed);
    assert_eq!(h.store.get_item("USE_UR_V1").await.unwrap(), None);
}

#[tokio::test]
async fn advanced_mode_off_writes_empty_value() {
    let h = Harness::new();
    h.store.set_item("advancedmodeenabled", "1").await.unwrap();
    let panel = h.panel(PlatformFamily::Windows);
    panel.mount().await.unwrap();

    let ticket = panel.toggle(SettingKey::AdvancedMode, false).unwrap();
    assert_eq!(ticket.wait().await, WriteOutcome::Confirmed);
    assert_eq!(
        h.store.get_item("advancedmodeenabled").await.unwrap().as_deref(),
        Some("")
    );
    assert_eq!(panel.value(SettingKey::AdvancedMode), Some(false));
}

#[tokio::test]
async fn hand_off_persists_on_ios() {
    let h = Harness::new();
    let panel = h.panel(PlatformFamily::Ios);
    panel.mount().await.unwrap();

    let view = panel.view();
    assert!(matches!(view.interactive_rows()[1], Row::Toggle { key: SettingKey::HandOff, .. }));

    let ticket = panel.toggle(SettingKey::HandOff, true).unwrap();
    assert_eq!(ticket.wait().await, WriteOutcome::Confirmed);
    assert_eq!(h.store.get_item("HandOff").await.unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn second_panel_sees_first_panels_write() {
    let h = Harness::new();
    let first = h.panel(PlatformFamily::Android);
    let second = h.panel(PlatformFamily::Android);
    first.mount().await.unwrap();
    second.mount().await.unwrap();

    let ticket = first.toggle(SettingKey::AdvancedMode, true).unwrap();
    assert_eq!(ticket.wait().await, WriteOutcome::Confirmed);

    eventually(|| second.value(SettingKey::AdvancedMode) == Some(true)).await;
}

#[tokio::test]
async fn wallet_refresh_reaches_mounted_panel() {
    let h = Harness::new();
    h.store.add_wallet("Main").unwrap();
    let panel = h.panel(PlatformFamily::Android);
    panel.mount().await.unwrap();
    assert!(!panel.view().has_route(Route::DefaultView));

    h.store.add_wallet("Cold storage").unwrap();
    assert_eq!(h.service.refresh_wallet_count().await.unwrap(), 2);
    eventually(|| panel.view().has_route(Route::DefaultView)).await;
}

/// 쓰기만 실패하는 저장소
struct ReadOnlyStore {
    inner: MemoryKeyValueStore,
    rejected: AtomicUsize,
}

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
        self.rejected.fetch_add(1, Ordering::SeqCst);
        Err(CoreError::Storage("읽기 전용".to_string()))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), CoreError> {
        self.rejected.fetch_add(1, Ordering::SeqCst);
        Err(CoreError::Storage("읽기 전용".to_string()))
    }

    async fn keys(&self) -> Result<Vec<String>, CoreError> {
        self.inner.keys().await
    }
}

#[tokio::test]
async fn read_only_store_rolls_back_with_notice() {
    let kv = Arc::new(ReadOnlyStore {
        inner: MemoryKeyValueStore::with_items([("USE_UR_V1", "1")]),
        rejected: AtomicUsize::new(0),
    });
    let wallets = Arc::new(SqliteStore::open_in_memory().unwrap());
    let service = Arc::new(SettingsService::new(
        FlagSet::from_shared(Arc::new(StoredFlags::new(kv.clone()))),
        wallets,
    ));
    let panel = GeneralSettingsPanel::new(
        service,
        Arc::new(RouteStack::new()),
        Arc::new(LocalizedText::new(Locale::En)),
        PlatformFamily::Android,
        PanelConfig {
            fetch_timeout_ms: 1_000,
            write_retry_attempts: 2,
            write_retry_backoff_ms: 1,
        },
    );
    panel.mount().await.unwrap();
    assert_eq!(panel.value(SettingKey::LegacyUrV1), Some(true));

    let ticket = panel.toggle(SettingKey::LegacyUrV1, false).unwrap();
    assert_eq!(panel.value(SettingKey::LegacyUrV1), Some(false));
    assert_eq!(ticket.wait().await, WriteOutcome::RolledBack);

    assert_eq!(panel.value(SettingKey::LegacyUrV1), Some(true));
    assert_eq!(kv.rejected.load(Ordering::SeqCst), 3);

    let notices = panel.take_notices();
    assert_eq!(notices.len(), 1);
    let message = notices[0].message(&LocalizedText::new(Locale::En));
    assert!(message.contains("Legacy URv1 QR"));
    assert!(matches!(notices[0], PanelNotice::WriteFailed { attempted: false, .. }));
}
