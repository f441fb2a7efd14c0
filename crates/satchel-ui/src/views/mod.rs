//! 화면 뷰 모델.

pub mod general_settings;
pub mod rows;
