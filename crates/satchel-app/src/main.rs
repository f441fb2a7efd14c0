//! # satchel-app
//!
//! Satchel 설정 CLI 진입점.
//! 설정 로드, 저장소/서비스/화면 와이어링, 하위 명령 처리.

mod display;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;
use satchel_core::config::AppConfig;
use satchel_core::config_manager::ConfigManager;
use satchel_core::models::platform::PlatformFamily;
use satchel_core::models::route::Route;
use satchel_core::models::setting::SettingKey;
use satchel_core::ports::text::TextProvider;
use satchel_core::ports::wallets::WalletDirectory;
use satchel_settings::{FlagSet, SettingsService};
use satchel_storage::flags::StoredFlags;
use satchel_storage::sqlite::SqliteStore;
use satchel_ui::{GeneralSettingsPanel, LocalizedText, Locale, RouteStack, WriteOutcome};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Satchel 지갑 설정 도구
///
/// 일반 설정 화면(고급 모드, 레거시 URv1 QR, 핸드오프)을 조회/변경한다.
#[derive(Parser, Debug)]
#[command(name = "satchel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 데이터 저장 경로 (기본: 플랫폼 데이터 디렉토리)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', global = true, default_value = "warn")]
    log_level: String,

    /// 플랫폼 지정 (ios, android, macos, windows, linux)
    #[arg(long, global = true)]
    platform: Option<PlatformFamily>,

    /// 표시 언어 (ko, en)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 일반 설정 화면 표시
    Show,
    /// 설정 토글 (advanced-mode, legacy-ur-v1, hand-off)
    Toggle {
        setting: SettingKey,
        state: Switch,
    },
    /// 하위 화면 열기 (default-view, privacy)
    Open { route: Route },
    /// 지갑 관리
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },
    /// 설정 파일
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum WalletAction {
    /// 지갑 추가
    Add { label: String },
    /// 지갑 목록
    List,
    /// 지갑 삭제
    Remove { id: Uuid },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// 설정 파일 경로
    Path,
    /// 현재 설정 (JSON)
    Show,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Switch {
    On,
    Off,
}

impl Switch {
    fn as_bool(self) -> bool {
        matches!(self, Switch::On)
    }
}

/// 데이터베이스 경로 결정 (CLI 인자 → 설정 파일 → 플랫폼 기본 경로)
///
/// # 플랫폼별 기본 경로:
/// - macOS: `~/Library/Application Support/org.satchel.satchel/satchel.db`
/// - Windows: `%APPDATA%\satchel\satchel\data\satchel.db`
/// - Linux: `~/.local/share/satchel/satchel.db`
fn resolve_db_path(cli_dir: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    let file_name = &config.storage.db_file_name;
    cli_dir
        .or_else(|| config.storage.data_dir.clone())
        .or_else(|| ProjectDirs::from("org", "satchel", "satchel").map(|p| p.data_dir().to_path_buf()))
        .map(|dir| dir.join(file_name))
        .unwrap_or_else(|| PathBuf::from(".").join(file_name))
}

fn resolve_platform(cli: Option<PlatformFamily>, config: &AppConfig) -> PlatformFamily {
    cli.or(config.ui.platform_override)
        .unwrap_or_else(PlatformFamily::current)
}

fn resolve_locale(cli: Option<&str>, config: &AppConfig) -> Result<Locale> {
    match cli.or(config.ui.locale.as_deref()) {
        Some(code) => {
            Locale::from_code(code).ok_or_else(|| anyhow!("지원하지 않는 언어: {code}"))
        }
        None => Ok(Locale::detect_system()),
    }
}

/// 조립된 의존성
struct App {
    store: Arc<SqliteStore>,
    service: Arc<SettingsService>,
    navigator: Arc<RouteStack>,
    text: Arc<LocalizedText>,
    platform: PlatformFamily,
    config: AppConfig,
}

impl App {
    fn build(args: &Args, config: AppConfig) -> Result<Self> {
        let db_path = resolve_db_path(args.data_dir.clone(), &config);
        info!("저장소: {}", db_path.display());
        let store = Arc::new(SqliteStore::open(&db_path)?);

        let flags = Arc::new(StoredFlags::new(store.clone()));
        let service = Arc::new(SettingsService::new(
            FlagSet::from_shared(flags),
            store.clone(),
        ));

        let platform = resolve_platform(args.platform, &config);
        let text = Arc::new(LocalizedText::new(resolve_locale(
            args.locale.as_deref(),
            &config,
        )?));
        debug!("플랫폼: {platform}, 언어: {}", text.locale().name());

        Ok(Self {
            store,
            service,
            navigator: Arc::new(RouteStack::new()),
            text,
            platform,
            config,
        })
    }

    /// 설정 화면 생성 후 마운트
    async fn mount_panel(&self) -> Result<GeneralSettingsPanel> {
        let panel = GeneralSettingsPanel::new(
            self.service.clone(),
            self.navigator.clone(),
            self.text.clone(),
            self.platform,
            self.config.panel.clone(),
        );
        panel.mount().await?;
        Ok(panel)
    }

    fn print_panel(&self, panel: &GeneralSettingsPanel) {
        let text: &dyn TextProvider = self.text.as_ref();
        print!("{}", display::render_panel(&panel.view(), text));
        let notices = panel.take_notices();
        if !notices.is_empty() {
            eprint!("{}", display::render_notices(&notices, text));
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config_manager = ConfigManager::new()?;
    let config = config_manager.get();

    if let Command::Config { action } = &args.command {
        match action {
            ConfigAction::Path => println!("{}", config_manager.config_path().display()),
            ConfigAction::Show => println!("{}", serde_json::to_string_pretty(&config)?),
        }
        return Ok(());
    }

    let app = App::build(&args, config)?;

    match args.command {
        Command::Show => {
            let panel = app.mount_panel().await?;
            app.print_panel(&panel);
            panel.unmount();
        }
        Command::Toggle { setting, state } => {
            let panel = app.mount_panel().await?;
            let ticket = panel.toggle(setting, state.as_bool())?;
            let outcome = ticket.wait().await;
            app.print_panel(&panel);
            panel.unmount();

            match outcome {
                WriteOutcome::Confirmed => info!("{setting} 저장 완료"),
                WriteOutcome::RolledBack => bail!("{setting} 저장 실패, 이전 값으로 되돌림"),
                other => warn!("{setting} 쓰기 결과: {other:?}"),
            }
        }
        Command::Open { route } => {
            let panel = app.mount_panel().await?;
            if !panel.view().has_route(route) {
                bail!("현재 화면에 없는 항목: {}", route.screen_name());
            }
            panel.navigate(route)?;
            panel.unmount();
            for route in app.navigator.history() {
                println!("→ {}", route.screen_name());
            }
        }
        Command::Wallet { action } => match action {
            WalletAction::Add { label } => {
                let wallet = app.store.add_wallet(&label)?;
                println!("추가됨: {} ({})", wallet.label, wallet.id);
            }
            WalletAction::List => {
                let wallets = app.store.list_wallets().await?;
                print!("{}", display::render_wallets(&wallets));
            }
            WalletAction::Remove { id } => {
                app.store.remove_wallet(id)?;
                println!("삭제됨: {id}");
            }
        },
        Command::Config { .. } => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "satchel={0},satchel_app={0},satchel_core={0},satchel_storage={0},satchel_settings={0},satchel_ui={0}",
        args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_toggle() {
        let args = Args::try_parse_from(["satchel", "toggle", "urv1", "on"]).unwrap();
        match args.command {
            Command::Toggle { setting, state } => {
                assert_eq!(setting, SettingKey::LegacyUrV1);
                assert!(state.as_bool());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["satchel", "show", "--platform", "ios", "--locale", "en"]).unwrap();
        assert_eq!(args.platform, Some(PlatformFamily::Ios));
        assert_eq!(args.locale.as_deref(), Some("en"));
    }

    #[test]
    fn cli_rejects_unknown_setting() {
        assert!(Args::try_parse_from(["satchel", "toggle", "darkmode", "on"]).is_err());
    }

    #[test]
    fn db_path_prefers_cli_dir() {
        let config = AppConfig::default_config();
        let path = resolve_db_path(Some(PathBuf::from("/tmp/satchel-test")), &config);
        assert_eq!(path, PathBuf::from("/tmp/satchel-test/satchel.db"));

        let mut config = AppConfig::default_config();
        config.storage.data_dir = Some(PathBuf::from("/var/satchel"));
        assert_eq!(
            resolve_db_path(None, &config),
            PathBuf::from("/var/satchel/satchel.db")
        );
    }

    #[test]
    fn platform_override_order() {
        let mut config = AppConfig::default_config();
        config.ui.platform_override = Some(PlatformFamily::Android);
        assert_eq!(resolve_platform(None, &config), PlatformFamily::Android);
        assert_eq!(
            resolve_platform(Some(PlatformFamily::Ios), &config),
            PlatformFamily::Ios
        );
    }

    #[test]
    fn locale_resolution() {
        let mut config = AppConfig::default_config();
        config.ui.locale = Some("ko".to_string());
        assert_eq!(resolve_locale(None, &config).unwrap(), Locale::Ko);
        assert_eq!(resolve_locale(Some("en"), &config).unwrap(), Locale::En);
        assert!(resolve_locale(Some("fr"), &config).is_err());
    }
}
