//! Aggregate rows that do not map to a single entity.

use serde::Serialize;

/// Row counts of the three tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    /// Rows in `restaurants`.
    pub restaurants: i64,
    /// Rows in `pizzas`.
    pub pizzas: i64,
    /// Rows in `restaurant_pizzas`.
    pub restaurant_pizzas: i64,
}
