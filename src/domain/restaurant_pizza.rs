//! Restaurant-offers-pizza-at-price associations.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Pizza, PizzaId, Price, Restaurant, RestaurantId, RestaurantPizzaId, ValidationError};

/// A row of the `restaurant_pizzas` table.
///
/// Carries foreign keys only. The related rows live in
/// [`RestaurantPizzaDetail`] when a caller needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct RestaurantPizza {
    /// Store-assigned identity.
    pub id: RestaurantPizzaId,
    /// Price in whole currency units, within `[1, 30]`.
    pub price: i64,
    /// Pizza on offer.
    pub pizza_id: PizzaId,
    /// Restaurant offering it.
    pub restaurant_id: RestaurantId,
}

/// Inputs of an association creation request, all present.
///
/// Nothing about them has been checked against the store yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantPizzaInput {
    /// Requested price, not yet range-checked.
    pub price: i64,
    /// Pizza to offer.
    pub pizza_id: PizzaId,
    /// Restaurant offering it.
    pub restaurant_id: RestaurantId,
}

/// A validated association that has not been persisted yet.
///
/// Building one requires the already-loaded restaurant and pizza, so an
/// instance proves both references exist and the price is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    price: Price,
    pizza_id: PizzaId,
    restaurant_id: RestaurantId,
}

impl NewRestaurantPizza {
    /// Validates `price` and links `restaurant` to `pizza`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RangeViolation`] if `price` is outside
    /// `[1, 30]`.
    pub fn new(price: i64, restaurant: &Restaurant, pizza: &Pizza) -> Result<Self, ValidationError> {
        Ok(Self {
            price: Price::new(price)?,
            pizza_id: pizza.id,
            restaurant_id: restaurant.id,
        })
    }

    /// Validated price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Referenced pizza.
    #[must_use]
    pub const fn pizza_id(&self) -> PizzaId {
        self.pizza_id
    }

    /// Referenced restaurant.
    #[must_use]
    pub const fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }
}

/// An association together with the rows it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaDetail {
    /// The association row.
    pub restaurant_pizza: RestaurantPizza,
    /// Row referenced by `pizza_id`.
    pub pizza: Pizza,
    /// Row referenced by `restaurant_id`.
    pub restaurant: Restaurant,
}
