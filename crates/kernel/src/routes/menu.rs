//! Evaluated navigation menu as JSON.
//!
//! `GET /menu` returns the whole tree; `GET /menu?path=main.deposit` returns
//! the subtree at that path. Predicates are evaluated per request.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::menu::MenuView;
use crate::routing::EndpointTable;
use crate::state::AppState;

const MENU: &str = "/menu";

#[derive(Debug, Deserialize)]
struct MenuQuery {
    #[serde(default)]
    path: String,
}

async fn menu_view(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<MenuView>> {
    let menu = state.menu()?;
    let root = menu.read();
    let entry = root.find(&query.path).ok_or(AppError::NotFound)?;
    let view = MenuView::build(entry, state.endpoints())?;
    Ok(Json(view))
}

/// Declare the menu endpoint.
pub fn declare(endpoints: &mut EndpointTable) {
    endpoints.add("menu.view", MENU);
}

/// Create the menu router.
pub fn router() -> Router<AppState> {
    Router::new().route(MENU, get(menu_view))
}
