//! 국제화 (i18n) 모듈.
//!
//! 한국어(ko), 영어(en) 지원.

use satchel_core::ports::text::{TextKey, TextProvider};

/// 지원 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 한국어 (기본값)
    #[default]
    Ko,
    /// 영어
    En,
}

impl Locale {
    /// 언어 코드 반환
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// 언어 이름 (해당 언어로)
    pub fn name(&self) -> &'static str {
        match self {
            Locale::Ko => "한국어",
            Locale::En => "English",
        }
    }

    /// 언어 코드로 변환 ("ko", "en", "ko_KR.UTF-8" 등)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        if code.starts_with("ko") {
            Some(Locale::Ko)
        } else if code.starts_with("en") {
            Some(Locale::En)
        } else {
            None
        }
    }

    /// 시스템 로케일 감지
    pub fn detect_system() -> Self {
        for var in ["LC_ALL", "LANG"] {
            if let Ok(lang) = std::env::var(var) {
                if let Some(locale) = Self::from_code(&lang) {
                    return locale;
                }
            }
        }
        // 기본값: 영어
        Locale::En
    }
}

/// 설정 화면 문자열 (로컬라이즈)
#[derive(Debug, Clone)]
pub struct Strings {
    pub general_title: &'static str,
    pub default_title: &'static str,
    pub privacy: &'static str,
    pub general_continuity: &'static str,
    pub general_continuity_e: &'static str,
    pub general_adv_mode: &'static str,
    pub general_adv_mode_e: &'static str,
    pub legacy_ur_v1: &'static str,
    pub loading: &'static str,
    pub fetch_failed: &'static str,
    pub write_failed: &'static str,
}

impl Strings {
    /// 한국어 문자열
    pub const KO: Strings = Strings {
        general_title: "일반",
        default_title: "실행 시 화면",
        privacy: "개인정보 보호",
        general_continuity: "연속성",
        general_continuity_e: "활성화하면 iCloud에 연결된 다른 Apple 기기에서 선택한 지갑과 거래 내역을 볼 수 있습니다.",
        general_adv_mode: "고급 모드",
        general_adv_mode_e: "활성화하면 다른 지갑 유형, 연결할 LNDHub 인스턴스 지정, 지갑 생성 시 사용자 엔트로피 같은 고급 옵션이 표시됩니다.",
        legacy_ur_v1: "Legacy URv1 QR",
        loading: "불러오는 중…",
        fetch_failed: "설정을 불러오지 못해 기본값을 사용합니다",
        write_failed: "설정을 저장하지 못해 이전 값으로 되돌렸습니다",
    };

    /// 영어 문자열
    pub const EN: Strings = Strings {
        general_title: "General",
        default_title: "On Launch",
        privacy: "Privacy",
        general_continuity: "Continuity",
        general_continuity_e: "When enabled, you will be able to view selected wallets, and transactions, using your other Apple iCloud connected devices.",
        general_adv_mode: "Advanced Mode",
        general_adv_mode_e: "When enabled, you will see advanced options such as different wallet types, the ability to specify the LNDHub instance you wish to connect to, and custom entropy during wallet creation.",
        legacy_ur_v1: "Legacy URv1 QR",
        loading: "Loading…",
        fetch_failed: "Couldn't load the setting, using the default",
        write_failed: "Couldn't save the setting, reverted to the previous value",
    };

    /// 로케일에 따른 문자열 반환
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::Ko => &Self::KO,
            Locale::En => &Self::EN,
        }
    }

    /// 키로 조회
    pub fn get(&self, key: TextKey) -> &'static str {
        match key {
            TextKey::GeneralTitle => self.general_title,
            TextKey::DefaultTitle => self.default_title,
            TextKey::Privacy => self.privacy,
            TextKey::GeneralContinuity => self.general_continuity,
            TextKey::GeneralContinuityExplain => self.general_continuity_e,
            TextKey::GeneralAdvMode => self.general_adv_mode,
            TextKey::GeneralAdvModeExplain => self.general_adv_mode_e,
            TextKey::LegacyUrV1 => self.legacy_ur_v1,
            TextKey::Loading => self.loading,
            TextKey::FetchFailed => self.fetch_failed,
            TextKey::WriteFailed => self.write_failed,
        }
    }
}

/// `TextProvider` 구현: 고정 로케일 문자열 테이블
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalizedText {
    locale: Locale,
}

impl LocalizedText {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl TextProvider for LocalizedText {
    fn lookup(&self, key: TextKey) -> String {
        Strings::for_locale(self.locale).get(key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_code() {
        assert_eq!(Locale::Ko.code(), "ko");
        assert_eq!(Locale::En.code(), "en");
    }

    #[test]
    fn locale_from_code() {
        assert_eq!(Locale::from_code("ko_KR.UTF-8"), Some(Locale::Ko));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr_FR"), None);
    }

    #[test]
    fn strings_for_locale() {
        let ko = Strings::for_locale(Locale::Ko);
        assert_eq!(ko.general_adv_mode, "고급 모드");

        let en = Strings::for_locale(Locale::En);
        assert_eq!(en.privacy, "Privacy");
    }

    #[test]
    fn legacy_title_is_not_translated() {
        assert_eq!(Strings::KO.legacy_ur_v1, Strings::EN.legacy_ur_v1);
    }

    #[test]
    fn provider_lookup() {
        let text = LocalizedText::new(Locale::En);
        assert_eq!(text.lookup(TextKey::DefaultTitle), "On Launch");
        assert_eq!(LocalizedText::default().locale(), Locale::Ko);
    }
}
