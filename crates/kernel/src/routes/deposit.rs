//! Deposition routes: available deposition types and their form definitions.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::form::{ARTICLE_FORM_ID, Form, deposition_form};
use crate::menu::{MenuItem, MenuRegistrations};
use crate::routing::{EndpointTable, UrlArgs, UrlResolver, axum_path};
use crate::state::AppState;

const OWNER: &str = "deposit";
const INDEX: &str = "/deposit";
const FORM: &str = "/deposit/:deposition_type";

/// Deposition types offered to depositors.
const DEPOSITION_TYPES: &[(&str, &str)] = &[(ARTICLE_FORM_ID, "Article")];

#[derive(Debug, Serialize)]
struct DepositionType {
    id: &'static str,
    name: &'static str,
    url: String,
}

fn form_args(deposition_type: &str) -> UrlArgs {
    UrlArgs::from([("deposition_type".to_string(), deposition_type.to_string())])
}

async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<DepositionType>>> {
    let types = DEPOSITION_TYPES
        .iter()
        .map(|&(id, name)| -> AppResult<DepositionType> {
            let url = state
                .endpoints()
                .resolve_url("deposit.form", &form_args(id))?;
            Ok(DepositionType { id, name, url })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Json(types))
}

async fn form(
    State(state): State<AppState>,
    Path(deposition_type): Path<String>,
) -> AppResult<Json<Form>> {
    let action = state
        .endpoints()
        .resolve_url("deposit.form", &form_args(&deposition_type))?;
    let form = deposition_form(&deposition_type, action).ok_or(AppError::NotFound)?;
    Ok(Json(form))
}

/// Declare deposition endpoints and menu entries.
pub fn declare(endpoints: &mut EndpointTable, menus: &mut MenuRegistrations) {
    endpoints
        .add(format!("{OWNER}.index"), INDEX)
        .add(format!("{OWNER}.form"), FORM);

    menus.register_menu(OWNER, "index", "main.deposit", MenuItem::labelled("Deposit").order(1));
    for (order, &(id, name)) in (0..).zip(DEPOSITION_TYPES) {
        menus.register_menu(
            OWNER,
            "form",
            format!("main.deposit.{id}"),
            MenuItem::labelled(name)
                .order(order)
                .arguments(move || form_args(id)),
        );
    }
}

/// Create the deposition router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(INDEX, get(index))
        .route(&axum_path(FORM), get(form))
}
