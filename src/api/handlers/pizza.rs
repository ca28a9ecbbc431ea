//! Pizza handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::serialization::record::PIZZA_FIELDS;
use crate::serialization::{FieldFilter, to_records};

/// `GET /pizzas` — List all pizzas.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on database failure.
#[utoipa::path(
    get,
    path = "/pizzas",
    tag = "Pizzas",
    summary = "List pizzas",
    description = "Returns every pizza as `{id, name, ingredients}`.",
    responses(
        (status = 200, description = "All pizzas", body = Vec<crate::domain::Pizza>),
    )
)]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let pizzas = state.catalog.list_pizzas().await?;
    Ok(Json(Value::Array(to_records(
        &pizzas,
        FieldFilter::only(PIZZA_FIELDS),
    ))))
}

/// Pizza routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}
