//! Satchel 도메인 모델.
//!
//! 설정 패널과 저장소 어댑터가 공유하는 데이터 구조체를 정의한다.

pub mod platform;
pub mod route;
pub mod setting;
pub mod wallet;
