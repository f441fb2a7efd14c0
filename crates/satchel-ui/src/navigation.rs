//! 화면 전환 기록.

use parking_lot::Mutex;
use satchel_core::models::route::Route;
use satchel_core::ports::navigator::Navigator;
use tracing::debug;

/// `Navigator` 구현: 이동한 화면을 스택으로 보관
#[derive(Debug, Default)]
pub struct RouteStack {
    stack: Mutex<Vec<Route>>,
}

impl RouteStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 가장 최근 화면
    pub fn current(&self) -> Option<Route> {
        self.stack.lock().last().copied()
    }

    /// 이동 순서대로 전체 기록
    pub fn history(&self) -> Vec<Route> {
        self.stack.lock().clone()
    }
}

impl Navigator for RouteStack {
    fn navigate(&self, route: Route) {
        debug!("화면 이동: {route}");
        self.stack.lock().push(route);
    }
}
