//! Association handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::CreateRestaurantPizzaRequest;
use crate::app_state::AppState;
use crate::domain::ValidationError;
use crate::error::{ApiError, ErrorsResponse};
use crate::serialization::record::RESTAURANT_PIZZA_DETAIL_FIELDS;
use crate::serialization::{FieldFilter, ToRecord};

/// `POST /restaurant_pizzas` — Offer a pizza at a restaurant.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for missing inputs, unknown ids, or an
/// out-of-range price, and [`ApiError::CreationFailed`] for store failures.
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = "RestaurantPizzas",
    summary = "Create restaurant pizza",
    description = "Links an existing restaurant and pizza at a price between 1 and 30. The response nests the full `pizza` and `restaurant`.",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Association created", body = serde_json::Value),
        (status = 400, description = "Invalid input", body = ErrorsResponse),
    )
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    body: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ValidationError::MalformedBody(rejection.body_text())
    })?;
    let input = request.into_input()?;

    let detail = state.catalog.create_restaurant_pizza(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(detail.to_record(FieldFilter::only(RESTAURANT_PIZZA_DETAIL_FIELDS))),
    ))
}

/// Association routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}
