//! # satchel-storage
//!
//! 로컬 저장소 어댑터.
//! SQLite 기반 키-값 저장, 지갑 목록, 스키마 마이그레이션을 관리하고
//! 그 위에서 설정 플래그 포트를 구현한다.
//!
//! ## 모듈
//! - `sqlite`: 키-값 저장소 + 지갑 디렉토리 (KeyValueStore, WalletDirectory 구현)
//! - `memory`: 인메모리 키-값 저장소
//! - `flags`: 플래그 포트 어댑터 (AdvancedModeFlag, LegacyEncodingFlag, HandOffFlag)
//! - `migration`: 스키마 마이그레이션

pub mod flags;
pub mod memory;
pub mod migration;
pub mod sqlite;
