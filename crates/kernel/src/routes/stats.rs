//! Usage statistics routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::menu::{MenuItem, MenuRegistrations};
use crate::models::{STA_EVENT_TABLE, StaEvent};
use crate::routing::EndpointTable;
use crate::state::AppState;

const OWNER: &str = "stats";
const EVENTS: &str = "/stats/events";

#[derive(Debug, Serialize)]
struct EventsResponse {
    table: &'static str,
    events: Vec<EventSummary>,
}

#[derive(Debug, Serialize)]
struct EventSummary {
    #[serde(flatten)]
    event: StaEvent,
    columns: Vec<String>,
}

async fn events(State(state): State<AppState>) -> AppResult<Json<EventsResponse>> {
    let events = StaEvent::list(state.db())
        .await?
        .into_iter()
        .map(|event| {
            let columns = event.columns().into_iter().map(str::to_string).collect();
            EventSummary { event, columns }
        })
        .collect();

    Ok(Json(EventsResponse {
        table: STA_EVENT_TABLE,
        events,
    }))
}

/// Declare statistics endpoints and menu entries.
pub fn declare(endpoints: &mut EndpointTable, menus: &mut MenuRegistrations) {
    endpoints.add(format!("{OWNER}.events"), EVENTS);

    menus.register_menu(
        OWNER,
        "events",
        "main.stats",
        MenuItem::labelled("Statistics").order(2),
    );
}

/// Create the statistics router.
pub fn router() -> Router<AppState> {
    Router::new().route(EVENTS, get(events))
}
