//! Type-safe entity identifiers.
//!
//! Every table uses a store-assigned integer primary key. Each entity gets
//! its own newtype so a pizza id can never be passed where a restaurant id
//! is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, sqlx::Type, ToSchema,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw row id.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id! {
    /// Primary key of a row in the `restaurants` table.
    RestaurantId
}

entity_id! {
    /// Primary key of a row in the `pizzas` table.
    PizzaId
}

entity_id! {
    /// Primary key of a row in the `restaurant_pizzas` table.
    RestaurantPizzaId
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(RestaurantId::new(42).to_string(), "42");
    }

    #[test]
    fn serializes_transparently() {
        let Ok(json) = serde_json::to_string(&PizzaId::new(7)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "7");

        let Ok(id) = serde_json::from_str::<RestaurantPizzaId>("13") else {
            panic!("deserialization failed");
        };
        assert_eq!(id.get(), 13);
    }

    #[test]
    fn converts_to_and_from_i64() {
        let id = RestaurantId::from(5);
        assert_eq!(i64::from(id), 5);
    }
}
