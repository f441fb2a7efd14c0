//! 화면 전환 포트.
//!
//! 구현: `satchel-ui::navigation::RouteStack`

use crate::models::route::Route;

/// 네비게이션 서비스: 호출 후 결과를 기다리지 않는다
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
