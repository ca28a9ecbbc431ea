//! Restaurant handlers: list, get, delete.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::app_state::AppState;
use crate::domain::{EntityKind, RestaurantId};
use crate::error::{ApiError, ErrorResponse};
use crate::serialization::record::{RESTAURANT_DETAIL_FIELDS, RESTAURANT_FIELDS};
use crate::serialization::{FieldFilter, ToRecord, to_records};

/// `GET /restaurants` — List all restaurants.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on database failure.
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "Restaurants",
    summary = "List restaurants",
    description = "Returns every restaurant as `{id, name, address}`, without associations.",
    responses(
        (status = 200, description = "All restaurants", body = Vec<crate::domain::Restaurant>),
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurants = state.catalog.list_restaurants().await?;
    Ok(Json(Value::Array(to_records(
        &restaurants,
        FieldFilter::only(RESTAURANT_FIELDS),
    ))))
}

/// `GET /restaurants/{id}` — Get one restaurant with its associations.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the restaurant does not exist.
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "Restaurants",
    summary = "Get restaurant",
    description = "Returns `{id, name, address, restaurant_pizzas}`. Nested associations carry only `id, price, pizza_id, restaurant_id`.",
    params(
        ("id" = i64, Path, description = "Restaurant id"),
    ),
    responses(
        (status = 200, description = "Restaurant with associations", body = serde_json::Value),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
    )
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state.catalog.get_restaurant(restaurant_id(id)?).await?;
    Ok(Json(detail.to_record(FieldFilter::only(
        RESTAURANT_DETAIL_FIELDS,
    ))))
}

/// `DELETE /restaurants/{id}` — Delete a restaurant and its associations.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the restaurant does not exist.
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = "Restaurants",
    summary = "Delete restaurant",
    description = "Removes the restaurant and every association it owns.",
    params(
        ("id" = i64, Path, description = "Restaurant id"),
    ),
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    state.catalog.delete_restaurant(restaurant_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// A path segment that is not an integer cannot name a restaurant.
fn restaurant_id(path: Result<Path<i64>, PathRejection>) -> Result<RestaurantId, ApiError> {
    path.map(|Path(id)| RestaurantId::new(id))
        .map_err(|_| ApiError::NotFound(EntityKind::Restaurant))
}

/// Restaurant routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}
