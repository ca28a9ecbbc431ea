//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Resource endpoints are mounted at the root, matching the paths existing
//! clients already call (`/restaurants`, `/pizzas`, `/restaurant_pizzas`).

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "pizza-restaurants", description = "Restaurants, pizzas, and the prices restaurants charge for them."),
    paths(
        handlers::system::home_handler,
        handlers::system::health_handler,
        handlers::restaurant::list_restaurants,
        handlers::restaurant::get_restaurant,
        handlers::restaurant::delete_restaurant,
        handlers::pizza::list_pizzas,
        handlers::restaurant_pizza::create_restaurant_pizza,
    ),
    components(schemas(
        crate::domain::Restaurant,
        crate::domain::Pizza,
        crate::domain::RestaurantPizza,
        dto::CreateRestaurantPizzaRequest,
        crate::error::ErrorResponse,
        crate::error::ErrorsResponse,
    )),
    tags(
        (name = "Restaurants", description = "Restaurant retrieval and deletion"),
        (name = "Pizzas", description = "Pizza catalog"),
        (name = "RestaurantPizzas", description = "Prices restaurants charge for pizzas"),
        (name = "System", description = "Landing page and health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
