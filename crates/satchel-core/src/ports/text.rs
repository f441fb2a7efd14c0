//! 로컬라이즈 문자열 포트.
//!
//! 구현: `satchel-ui::i18n::LocalizedText`

/// 설정 화면에서 사용하는 문자열 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// 화면 제목
    GeneralTitle,
    /// 기본 지갑(실행 시 화면) 항목
    DefaultTitle,
    /// 프라이버시 항목
    Privacy,
    /// 핸드오프 항목
    GeneralContinuity,
    /// 핸드오프 설명
    GeneralContinuityExplain,
    /// 고급 모드 항목
    GeneralAdvMode,
    /// 고급 모드 설명
    GeneralAdvModeExplain,
    /// 레거시 URv1 QR 항목
    LegacyUrV1,
    /// 로딩 표시
    Loading,
    /// 조회 실패 안내
    FetchFailed,
    /// 저장 실패 안내
    WriteFailed,
}

/// 동기 문자열 조회
pub trait TextProvider: Send + Sync {
    fn lookup(&self, key: TextKey) -> String;
}
