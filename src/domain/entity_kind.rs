//! Names of the three persisted entity types.

use std::fmt;

/// Discriminates the entity types in error messages and logs.
///
/// The [`fmt::Display`] form is the name clients see, e.g.
/// `"Restaurant not found"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A row of `restaurants`.
    Restaurant,
    /// A row of `pizzas`.
    Pizza,
    /// A row of `restaurant_pizzas`.
    RestaurantPizza,
}

impl EntityKind {
    /// Client-facing entity name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Pizza => "Pizza",
            Self::RestaurantPizza => "RestaurantPizza",
        }
    }

    /// Backing table name.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurants",
            Self::Pizza => "pizzas",
            Self::RestaurantPizza => "restaurant_pizzas",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
