//! Association DTOs for `POST /restaurant_pizzas`.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{PizzaId, RestaurantId, RestaurantPizzaInput, ValidationError};

/// Request body for `POST /restaurant_pizzas`.
///
/// Every field is optional at the wire level so that absent or `null`
/// values surface as a [`ValidationError::MissingField`] naming them,
/// rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price in whole currency units, `1..=30`.
    pub price: Option<i64>,
    /// Id of an existing pizza.
    pub pizza_id: Option<i64>,
    /// Id of an existing restaurant.
    pub restaurant_id: Option<i64>,
}

impl CreateRestaurantPizzaRequest {
    /// Checks that all three inputs are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] listing every absent input.
    pub fn into_input(self) -> Result<RestaurantPizzaInput, ValidationError> {
        match (self.price, self.pizza_id, self.restaurant_id) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) => Ok(RestaurantPizzaInput {
                price,
                pizza_id: PizzaId::new(pizza_id),
                restaurant_id: RestaurantId::new(restaurant_id),
            }),
            (price, pizza_id, restaurant_id) => {
                let missing = [
                    ("price", price.is_none()),
                    ("pizza_id", pizza_id.is_none()),
                    ("restaurant_id", restaurant_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                Err(ValidationError::MissingField(missing))
            }
        }
    }
}
