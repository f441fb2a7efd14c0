//! 설정 서비스.
//!
//! 플래그 포트 세 개와 지갑 디렉토리를 묶어 키 단위 읽기/쓰기로 노출한다.
//! 쓰기가 성공하면 구독자에게 `SettingsEvent::FlagChanged`를 발행한다.

use satchel_core::error::CoreError;
use satchel_core::models::setting::SettingKey;
use satchel_core::ports::flags::{AdvancedModeFlag, HandOffFlag, LegacyEncodingFlag};
use satchel_core::ports::wallets::WalletDirectory;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::event::SettingsEvent;

/// 이벤트 채널 용량
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// 플래그 포트 묶음
#[derive(Clone)]
pub struct FlagSet {
    pub advanced_mode: Arc<dyn AdvancedModeFlag>,
    pub legacy_encoding: Arc<dyn LegacyEncodingFlag>,
    pub hand_off: Arc<dyn HandOffFlag>,
}

impl FlagSet {
    /// 세 포트를 모두 구현한 어댑터 하나로 생성
    pub fn from_shared<T>(flags: Arc<T>) -> Self
    where
        T: AdvancedModeFlag + LegacyEncodingFlag + HandOffFlag + 'static,
    {
        Self {
            advanced_mode: flags.clone(),
            legacy_encoding: flags.clone(),
            hand_off: flags,
        }
    }
}

/// 설정 서비스: 플래그/지갑 데이터의 단일 소유 경계
pub struct SettingsService {
    flags: FlagSet,
    wallets: Arc<dyn WalletDirectory>,
    events: broadcast::Sender<SettingsEvent>,
}

impl SettingsService {
    /// 새 서비스 생성
    pub fn new(flags: FlagSet, wallets: Arc<dyn WalletDirectory>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            flags,
            wallets,
            events,
        }
    }

    /// 플래그 조회
    pub async fn read(&self, key: SettingKey) -> Result<bool, CoreError> {
        let value = match key {
            SettingKey::AdvancedMode => self.flags.advanced_mode.is_enabled().await?,
            SettingKey::LegacyUrV1 => self.flags.legacy_encoding.is_enabled().await?,
            SettingKey::HandOff => self.flags.hand_off.is_enabled().await?,
        };
        debug!("설정 조회: {key} = {value}");
        Ok(value)
    }

    /// 플래그 저장
    ///
    /// 레거시 인코딩은 값에 따라 `enable`/`disable` 중 하나만 호출한다.
    /// `origin`은 이벤트에 그대로 실려 요청한 화면이 자기 쓰기를 구분할 수 있게 한다.
    pub async fn write(
        &self,
        key: SettingKey,
        value: bool,
        origin: Option<Uuid>,
    ) -> Result<(), CoreError> {
        match key {
            SettingKey::AdvancedMode => self.flags.advanced_mode.set_enabled(value).await?,
            SettingKey::LegacyUrV1 => {
                if value {
                    self.flags.legacy_encoding.enable().await?
                } else {
                    self.flags.legacy_encoding.disable().await?
                }
            }
            SettingKey::HandOff => self.flags.hand_off.set_enabled(value).await?,
        }

        info!("설정 저장: {key} = {value}");
        self.publish(SettingsEvent::FlagChanged { key, value, origin });
        Ok(())
    }

    /// 등록된 지갑 수
    pub async fn wallet_count(&self) -> Result<usize, CoreError> {
        self.wallets.wallet_count().await
    }

    /// 지갑 수를 다시 읽어 구독자에게 알린다
    pub async fn refresh_wallet_count(&self) -> Result<usize, CoreError> {
        let count = self.wallets.wallet_count().await?;
        self.publish(SettingsEvent::WalletCountChanged(count));
        Ok(count)
    }

    /// 변경 이벤트 구독
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: SettingsEvent) {
        if self.events.send(event).is_err() {
            // 구독자 없음
            debug!("설정 이벤트 구독자 없음");
        }
    }
}

impl std::fmt::Debug for SettingsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsService")
            .field("subscribers", &self.events.receiver_count())
            .finish_non_exhaustive()
    }
}

/// 구독 수신 에러를 로그로 남기고 계속 진행할지 반환
pub fn handle_recv_error(err: broadcast::error::RecvError) -> bool {
    match err {
        broadcast::error::RecvError::Lagged(skipped) => {
            warn!("설정 이벤트 {skipped}건 유실");
            true
        }
        broadcast::error::RecvError::Closed => false,
    }
}
