//! REST endpoint handlers organized by resource.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(restaurant::routes())
        .merge(pizza::routes())
        .merge(restaurant_pizza::routes())
}
