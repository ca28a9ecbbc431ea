//! Domain layer: entity records, identifiers, and validation rules.
//!
//! Records mirror the three tables one-to-one. Relations are expressed as
//! foreign-key ids plus explicit detail structs ([`RestaurantDetail`],
//! [`RestaurantPizzaDetail`]) loaded on demand, never as back-references.

pub mod entity_id;
pub mod entity_kind;
pub mod pizza;
pub mod price;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod validation;

pub use entity_id::{PizzaId, RestaurantId, RestaurantPizzaId};
pub use entity_kind::EntityKind;
pub use pizza::{NewPizza, Pizza};
pub use price::Price;
pub use restaurant::{NewRestaurant, Restaurant, RestaurantDetail};
pub use restaurant_pizza::{
    NewRestaurantPizza, RestaurantPizza, RestaurantPizzaDetail, RestaurantPizzaInput,
};
pub use validation::ValidationError;
