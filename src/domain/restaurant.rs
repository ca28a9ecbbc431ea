//! Restaurant records.

use serde::Serialize;
use utoipa::ToSchema;

use super::{RestaurantId, RestaurantPizza};

/// A row of the `restaurants` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Restaurant {
    /// Store-assigned identity.
    pub id: RestaurantId,
    /// Display name, e.g. `"Karen's Pizza Shack"`.
    pub name: String,
    /// Free-form street address.
    pub address: String,
}

/// Insert payload for a restaurant. Only used by seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
}

impl NewRestaurant {
    /// Builds an insert payload.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A restaurant together with every association it owns.
///
/// Loaded for single-restaurant retrieval, where the serialized form may
/// expand `restaurant_pizzas`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetail {
    /// The restaurant row.
    pub restaurant: Restaurant,
    /// Associations whose `restaurant_id` is this restaurant, ordered by id.
    pub restaurant_pizzas: Vec<RestaurantPizza>,
}
