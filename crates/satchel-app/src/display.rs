//! 터미널 출력.
//!
//! `PanelView`를 상자 형태 텍스트로 그린다.

use satchel_core::models::wallet::WalletSummary;
use satchel_core::ports::text::{TextKey, TextProvider};
use satchel_ui::{PanelNotice, PanelView, Row};

const WIDTH: usize = 56;

/// 설정 화면 렌더
pub fn render_panel(view: &PanelView, text: &dyn TextProvider) -> String {
    let mut out = String::new();
    out.push_str(&border('┌', '┐'));
    out.push_str(&line(&text.lookup(TextKey::GeneralTitle)));
    out.push_str(&border('├', '┤'));

    match view {
        PanelView::Loading { label } => out.push_str(&line(&format!("⏳ {label}"))),
        PanelView::Ready { rows } => {
            for row in rows {
                out.push_str(&line(&render_row(row)));
            }
        }
    }

    out.push_str(&border('└', '┘'));
    out
}

fn render_row(row: &Row) -> String {
    match row {
        Row::Navigation { title, .. } => format!("{title}  ›"),
        Row::Toggle {
            title,
            value,
            pending,
            ..
        } => {
            let switch = if *value { "[●  ON]" } else { "[OFF  ○]" };
            let marker = if *pending { " …" } else { "" };
            format!("{title}  {switch}{marker}")
        }
        Row::Caption { text } => format!("  {text}"),
    }
}

/// 실패 안내 렌더
pub fn render_notices(notices: &[PanelNotice], text: &dyn TextProvider) -> String {
    notices
        .iter()
        .map(|n| format!("⚠️  {}\n", n.message(text)))
        .collect()
}

/// 지갑 목록 렌더
pub fn render_wallets(wallets: &[WalletSummary]) -> String {
    if wallets.is_empty() {
        return "등록된 지갑 없음\n".to_string();
    }
    wallets
        .iter()
        .map(|w| {
            format!(
                "{}  {}  ({})\n",
                w.id,
                w.label,
                w.created_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect()
}

fn border(left: char, right: char) -> String {
    format!("{left}{}{right}\n", "─".repeat(WIDTH))
}

fn line(content: &str) -> String {
    let pad = WIDTH.saturating_sub(content.chars().count() + 1);
    format!("│ {content}{}│\n", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::models::route::Route;
    use satchel_core::models::setting::SettingKey;
    use satchel_ui::{LocalizedText, Locale};

    #[test]
    fn renders_loading() {
        let text = LocalizedText::new(Locale::En);
        let view = PanelView::Loading {
            label: "Loading".to_string(),
        };
        let out = render_panel(&view, &text);
        assert!(out.contains("Loading"));
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn renders_rows_in_order() {
        let text = LocalizedText::new(Locale::En);
        let view = PanelView::Ready {
            rows: vec![
                Row::Navigation {
                    route: Route::SettingsPrivacy,
                    title: "Privacy".to_string(),
                    test_id: Some("SettingsPrivacy"),
                },
                Row::Toggle {
                    key: SettingKey::AdvancedMode,
                    title: "Advanced Mode".to_string(),
                    value: true,
                    pending: true,
                    test_id: Some("AdvancedMode"),
                },
            ],
        };
        let out = render_panel(&view, &text);
        let privacy = out.find("Privacy").unwrap();
        let advanced = out.find("Advanced Mode").unwrap();
        assert!(privacy < advanced);
        assert!(out.contains("[●  ON] …"));
    }

    #[test]
    fn empty_wallet_list() {
        assert_eq!(render_wallets(&[]), "등록된 지갑 없음\n");
        let out = render_wallets(&[WalletSummary::new("Savings")]);
        assert!(out.contains("Savings"));
    }
}
