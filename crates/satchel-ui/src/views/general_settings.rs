//! 일반 설정 화면.
//!
//! 상태 머신은 `Loading → Ready` 단방향이며 조회는 마운트당 한 번만 실행된다.
//! 토글은 화면 값을 즉시 바꾸고(낙관적 갱신) 키별 쓰기 워커에 작업을 넘긴다.
//! 같은 키의 쓰기는 요청 순서대로 저장소에 도달하고,
//! 가장 최근 쓰기가 끝내 실패하면 확인된 값으로 되돌린 뒤 안내를 남긴다.

use parking_lot::Mutex;
use satchel_core::config::PanelConfig;
use satchel_core::error::CoreError;
use satchel_core::models::platform::PlatformFamily;
use satchel_core::models::route::Route;
use satchel_core::models::setting::{SettingKey, ToggleSetting};
use satchel_core::ports::navigator::Navigator;
use satchel_core::ports::text::{TextKey, TextProvider};
use satchel_settings::service::handle_recv_error;
use satchel_settings::{SettingsEvent, SettingsService};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::PanelError;
use crate::views::rows::{build_rows, tracked_keys, PanelNotice, PanelView};

/// 패널 표시 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// 최초 조회 중: 로딩 표시
    Loading,
    /// 조회 완료 (이후 변하지 않음)
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    /// 최초 조회 진행 중
    Mounting,
    Mounted,
    Unmounted,
}

/// 토글 쓰기 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 저장 성공, 화면 값 확정
    Confirmed,
    /// 재시도 후에도 실패: 확인된 값으로 되돌림
    RolledBack,
    /// 같은 키의 더 최근 토글이 있어 화면 값에 관여하지 않음
    Superseded,
    /// 언마운트 이후 완료: 화면 상태 미반영
    Discarded,
}

/// 토글 한 번에 대한 완료 대기 핸들
#[derive(Debug)]
pub struct WriteTicket {
    key: SettingKey,
    value: bool,
    reply: oneshot::Receiver<WriteOutcome>,
}

impl WriteTicket {
    pub fn key(&self) -> SettingKey {
        self.key
    }

    pub fn value(&self) -> bool {
        self.value
    }

    /// 쓰기 완료까지 대기
    pub async fn wait(self) -> WriteOutcome {
        self.reply.await.unwrap_or(WriteOutcome::Discarded)
    }
}

struct WriteJob {
    value: bool,
    generation: u64,
    reply: oneshot::Sender<WriteOutcome>,
}

struct PanelModel {
    lifecycle: Lifecycle,
    phase: PanelPhase,
    settings: HashMap<SettingKey, ToggleSetting>,
    /// 키별 토글 순번: 가장 최근 쓰기만 롤백을 결정한다
    generations: HashMap<SettingKey, u64>,
    wallet_count: usize,
    notices: Vec<PanelNotice>,
}

/// 워커/리스너 태스크와 공유하는 상태
struct PanelShared {
    id: Uuid,
    service: Arc<SettingsService>,
    config: PanelConfig,
    model: Mutex<PanelModel>,
}

/// 일반 설정 화면 뷰 모델
pub struct GeneralSettingsPanel {
    shared: Arc<PanelShared>,
    navigator: Arc<dyn Navigator>,
    text: Arc<dyn TextProvider>,
    platform: PlatformFamily,
    writers: Mutex<HashMap<SettingKey, mpsc::UnboundedSender<WriteJob>>>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl GeneralSettingsPanel {
    /// 새 패널 생성 (아직 조회하지 않음)
    pub fn new(
        service: Arc<SettingsService>,
        navigator: Arc<dyn Navigator>,
        text: Arc<dyn TextProvider>,
        platform: PlatformFamily,
        config: PanelConfig,
    ) -> Self {
        let settings = tracked_keys(platform)
            .into_iter()
            .map(|key| (key, ToggleSetting::loading(key)))
            .collect();

        Self {
            shared: Arc::new(PanelShared {
                id: Uuid::new_v4(),
                service,
                config,
                model: Mutex::new(PanelModel {
                    lifecycle: Lifecycle::Created,
                    phase: PanelPhase::Loading,
                    settings,
                    generations: HashMap::new(),
                    wallet_count: 0,
                    notices: Vec::new(),
                }),
            }),
            navigator,
            text,
            platform,
            writers: Mutex::new(HashMap::new()),
            listener: Mutex::new(None),
        }
    }

    /// 마운트: 플래그와 지갑 수를 조회하고 `Ready`로 전환한다
    ///
    /// 마운트가 끝난 뒤의 호출은 조회 없이 현재 단계를 반환하고,
    /// 다른 호출이 조회 중이면 `Loading`을 반환한다.
    /// 조회 실패나 타임아웃은 해당 설정을 `false`로 두고 안내를 남긴다.
    /// 조회 도중 future가 취소되면 다시 `mount()`할 수 있는 상태로 돌아간다.
    pub async fn mount(&self) -> Result<PanelPhase, PanelError> {
        {
            let mut model = self.shared.model.lock();
            match model.lifecycle {
                Lifecycle::Unmounted => return Err(PanelError::Unmounted),
                Lifecycle::Mounted => {
                    debug!("이미 마운트됨, 조회 생략");
                    return Ok(model.phase);
                }
                Lifecycle::Mounting => {
                    debug!("마운트 진행 중, 조회 생략");
                    return Ok(PanelPhase::Loading);
                }
                Lifecycle::Created => model.lifecycle = Lifecycle::Mounting,
            }
        }
        let _cancel = MountCancelGuard {
            shared: &self.shared,
        };
        info!("일반 설정 화면 마운트 (플랫폼: {})", self.platform);

        // 조회 도중 발생한 변경도 놓치지 않도록 먼저 구독
        let events = self.shared.service.subscribe();
        self.spawn_writers();

        let keys = tracked_keys(self.platform);
        let mut fetched = Vec::with_capacity(keys.len());
        for key in keys {
            fetched.push((key, self.shared.fetch_flag(key).await));
        }
        let wallet_count = self.shared.fetch_wallet_count().await;

        {
            let mut guard = self.shared.model.lock();
            let model = &mut *guard;
            if model.lifecycle == Lifecycle::Unmounted {
                debug!("조회 중 언마운트됨, 결과 폐기");
                return Err(PanelError::Unmounted);
            }

            for (key, result) in fetched {
                let value = match result {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("설정 조회 실패, 기본값 사용: {key}: {e}");
                        model.notices.push(PanelNotice::FetchFailed {
                            key,
                            reason: e.to_string(),
                        });
                        false
                    }
                };
                if let Some(setting) = model.settings.get_mut(&key) {
                    setting.resolve(value);
                }
            }
            model.wallet_count = wallet_count;
            model.phase = PanelPhase::Ready;
            model.lifecycle = Lifecycle::Mounted;
        }

        self.spawn_listener(events);
        info!("일반 설정 준비 완료 (지갑 {wallet_count}개)");
        Ok(PanelPhase::Ready)
    }

    /// 토글: 화면 값을 즉시 바꾸고 저장을 예약한다
    ///
    /// 반환 시점에 저장 완료는 보장되지 않는다. 결과가 필요하면 `WriteTicket::wait`.
    pub fn toggle(&self, key: SettingKey, value: bool) -> Result<WriteTicket, PanelError> {
        // 순번 부여와 큐 투입을 한 임계 구역에서 처리 (writers → model 순서로 잠금)
        let writers = self.writers.lock();
        let mut guard = self.shared.model.lock();
        let model = &mut *guard;
        match model.lifecycle {
            Lifecycle::Created => return Err(PanelError::NotMounted),
            Lifecycle::Unmounted => return Err(PanelError::Unmounted),
            Lifecycle::Mounting | Lifecycle::Mounted => {}
        }
        if model.phase == PanelPhase::Loading {
            return Err(PanelError::NotReady);
        }

        let tx = writers.get(&key).ok_or(PanelError::Hidden(key))?;
        let setting = model
            .settings
            .get_mut(&key)
            .ok_or(PanelError::Hidden(key))?;

        let (reply, rx) = oneshot::channel();
        let generation = model.generations.get(&key).copied().unwrap_or(0) + 1;
        tx.send(WriteJob {
            value,
            generation,
            reply,
        })
        .map_err(|_| PanelError::Unmounted)?;

        setting.pending = Some(value);
        model.generations.insert(key, generation);

        debug!("토글: {key} → {value} (#{generation})");
        Ok(WriteTicket {
            key,
            value,
            reply: rx,
        })
    }

    /// 하위 화면으로 이동 (상태 변경 없음)
    pub fn navigate(&self, route: Route) -> Result<(), PanelError> {
        let lifecycle = self.shared.model.lock().lifecycle;
        match lifecycle {
            Lifecycle::Created => return Err(PanelError::NotMounted),
            Lifecycle::Unmounted => return Err(PanelError::Unmounted),
            Lifecycle::Mounting | Lifecycle::Mounted => {}
        }

        info!("하위 화면 이동: {route}");
        self.navigator.navigate(route);
        Ok(())
    }

    /// 언마운트: 리스너 중단, 쓰기 큐 닫기
    ///
    /// 이미 큐에 들어간 쓰기는 저장소까지 진행되지만 화면 상태에는 반영되지 않는다.
    pub fn unmount(&self) {
        {
            let mut model = self.shared.model.lock();
            if model.lifecycle == Lifecycle::Unmounted {
                return;
            }
            model.lifecycle = Lifecycle::Unmounted;
        }

        if let Some(handle) = self.listener.lock().take() {
            handle.abort();
        }
        self.writers.lock().clear();
        info!("일반 설정 화면 언마운트");
    }

    /// 현재 상태 렌더
    pub fn view(&self) -> PanelView {
        let model = self.shared.model.lock();
        match model.phase {
            PanelPhase::Loading => PanelView::Loading {
                label: self.text.lookup(TextKey::Loading),
            },
            PanelPhase::Ready => PanelView::Ready {
                rows: build_rows(
                    self.platform,
                    model.wallet_count,
                    &model.settings,
                    self.text.as_ref(),
                ),
            },
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.shared.model.lock().phase
    }

    /// 표시 중인 값 (로딩 중이거나 추적하지 않는 키면 None)
    pub fn value(&self, key: SettingKey) -> Option<bool> {
        let model = self.shared.model.lock();
        model
            .settings
            .get(&key)
            .filter(|s| !s.loading)
            .map(ToggleSetting::value)
    }

    /// 설정 상태 스냅샷
    pub fn setting(&self, key: SettingKey) -> Option<ToggleSetting> {
        self.shared.model.lock().settings.get(&key).cloned()
    }

    pub fn wallet_count(&self) -> usize {
        self.shared.model.lock().wallet_count
    }

    /// 쌓인 실패 안내를 꺼낸다
    pub fn take_notices(&self) -> Vec<PanelNotice> {
        std::mem::take(&mut self.shared.model.lock().notices)
    }

    pub fn platform(&self) -> PlatformFamily {
        self.platform
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.model.lock().lifecycle == Lifecycle::Mounted
    }

    fn spawn_writers(&self) {
        let mut writers = self.writers.lock();
        for key in tracked_keys(self.platform) {
            let (tx, rx) = mpsc::unbounded_channel();
            tokio::spawn(run_writer(self.shared.clone(), key, rx));
            writers.insert(key, tx);
        }
    }

    fn spawn_listener(&self, mut events: broadcast::Receiver<SettingsEvent>) {
        let shared = self.shared.clone();
        let handle = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => shared.apply_event(event),
                    Err(e) => {
                        if !handle_recv_error(e) {
                            break;
                        }
                    }
                }
            }
            debug!("설정 이벤트 리스너 종료");
        });

        if self.is_mounted() {
            *self.listener.lock() = Some(handle);
        } else {
            handle.abort();
        }
    }
}

/// 조회 중 `mount()` future가 버려지면 `Created`로 되돌린다
struct MountCancelGuard<'a> {
    shared: &'a PanelShared,
}

impl Drop for MountCancelGuard<'_> {
    fn drop(&mut self) {
        let mut model = self.shared.model.lock();
        if model.lifecycle == Lifecycle::Mounting {
            warn!("마운트 조회가 취소됨, 다음 mount()에서 다시 조회");
            model.lifecycle = Lifecycle::Created;
        }
    }
}

impl Drop for GeneralSettingsPanel {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl PanelShared {
    async fn fetch_flag(&self, key: SettingKey) -> Result<bool, CoreError> {
        match tokio::time::timeout(self.config.fetch_timeout(), self.service.read(key)).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::Timeout {
                operation: format!("{key} 조회"),
                timeout_ms: self.config.fetch_timeout_ms,
            }),
        }
    }

    async fn fetch_wallet_count(&self) -> usize {
        match tokio::time::timeout(self.config.fetch_timeout(), self.service.wallet_count()).await
        {
            Ok(Ok(count)) => count,
            Ok(Err(e)) => {
                warn!("지갑 수 조회 실패, 0으로 표시: {e}");
                0
            }
            Err(_) => {
                warn!(
                    "지갑 수 조회 타임아웃 ({}ms), 0으로 표시",
                    self.config.fetch_timeout_ms
                );
                0
            }
        }
    }

    /// 재시도 정책에 따라 저장
    async fn persist(&self, key: SettingKey, value: bool) -> Result<(), CoreError> {
        let attempts = self.config.write_retry_attempts + 1;
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.service.write(key, value, Some(self.id)).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    warn!("설정 저장 실패 ({attempt}/{attempts}): {key}: {e}");
                    last_error = Some(e);
                    if attempt < attempts {
                        tokio::time::sleep(self.config.write_retry_backoff()).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| CoreError::Internal(format!("{key} 저장 시도 없음"))))
    }

    /// 쓰기 결과를 화면 상태에 반영
    fn complete_write(
        &self,
        key: SettingKey,
        value: bool,
        generation: u64,
        result: Result<(), CoreError>,
    ) -> WriteOutcome {
        let mut guard = self.model.lock();
        let model = &mut *guard;
        if model.lifecycle == Lifecycle::Unmounted {
            return WriteOutcome::Discarded;
        }

        let latest = model.generations.get(&key).copied().unwrap_or(0);
        let Some(setting) = model.settings.get_mut(&key) else {
            return WriteOutcome::Discarded;
        };

        match result {
            Ok(()) => {
                setting.confirmed = value;
                if generation == latest {
                    setting.pending = None;
                    WriteOutcome::Confirmed
                } else {
                    WriteOutcome::Superseded
                }
            }
            Err(e) if generation == latest => {
                setting.pending = None;
                warn!("설정 롤백: {key} → {}", setting.confirmed);
                model.notices.push(PanelNotice::WriteFailed {
                    key,
                    attempted: value,
                    reason: e.to_string(),
                });
                WriteOutcome::RolledBack
            }
            Err(_) => WriteOutcome::Superseded,
        }
    }

    /// 다른 화면/서비스에서 온 변경 반영
    fn apply_event(&self, event: SettingsEvent) {
        let mut guard = self.model.lock();
        let model = &mut *guard;
        if model.lifecycle != Lifecycle::Mounted {
            return;
        }

        match event {
            SettingsEvent::FlagChanged {
                origin: Some(origin),
                ..
            } if origin == self.id => {}
            SettingsEvent::FlagChanged { key, value, .. } => {
                if let Some(setting) = model.settings.get_mut(&key) {
                    debug!("외부 변경 반영: {key} = {value}");
                    setting.confirmed = value;
                }
            }
            SettingsEvent::WalletCountChanged(count) => {
                debug!("지갑 수 변경: {count}");
                model.wallet_count = count;
            }
        }
    }
}

async fn run_writer(
    shared: Arc<PanelShared>,
    key: SettingKey,
    mut jobs: mpsc::UnboundedReceiver<WriteJob>,
) {
    while let Some(job) = jobs.recv().await {
        let result = shared.persist(key, job.value).await;
        let outcome = shared.complete_write(key, job.value, job.generation, result);
        debug!("쓰기 완료: {key} = {} → {outcome:?}", job.value);
        let _ = job.reply.send(outcome);
    }
    debug!("쓰기 워커 종료: {key}");
}
