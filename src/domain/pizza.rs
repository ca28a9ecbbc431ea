//! Pizza records.

use serde::Serialize;
use utoipa::ToSchema;

use super::PizzaId;

/// A row of the `pizzas` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Pizza {
    /// Store-assigned identity.
    pub id: PizzaId,
    /// Display name, e.g. `"Emma"`.
    pub name: String,
    /// Comma-separated ingredient list, kept verbatim.
    pub ingredients: String,
}

/// Insert payload for a pizza. Only used by seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    /// Display name.
    pub name: String,
    /// Comma-separated ingredient list.
    pub ingredients: String,
}

impl NewPizza {
    /// Builds an insert payload.
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }
}
