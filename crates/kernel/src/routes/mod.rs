//! HTTP route handlers.
//!
//! Each route module declares its endpoints and menu entries next to its
//! handlers; [`declare`] collects them during application assembly.

pub mod deposit;
pub mod health;
pub mod menu;
pub mod stats;

use axum::Router;

use crate::menu::MenuRegistrations;
use crate::routing::EndpointTable;
use crate::state::AppState;

/// Declare every route's endpoints and menu entries.
pub fn declare(endpoints: &mut EndpointTable, menus: &mut MenuRegistrations) {
    health::declare(endpoints);
    menu::declare(endpoints);
    deposit::declare(endpoints, menus);
    stats::declare(endpoints, menus);
}

/// Create the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(deposit::router())
        .merge(stats::router())
}
