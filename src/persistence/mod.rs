//! Persistence layer: SQLite tables for restaurants, pizzas and their
//! associations.
//!
//! [`SqliteStore`] owns the `sqlx::SqlitePool` and hands out connections
//! and transactions; [`queries`] holds the SQL, written against a single
//! connection so the caller chooses the transaction scope.

pub mod models;
pub mod queries;
pub mod sqlite;

pub use models::TableCounts;
pub use sqlite::SqliteStore;
