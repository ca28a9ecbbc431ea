//! # pizza-restaurants
//!
//! REST API over a catalog of restaurants, pizzas, and the prices each
//! restaurant charges for a pizza.
//!
//! Restaurants and pizzas are loaded by the `seed` binary; clients read
//! them, delete restaurants (their price entries go with them), and create
//! new price entries within `1..=30`.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── CatalogService (service/)
//!     ├── Field-filtered records (serialization/)
//!     │
//!     ├── Entities and validation (domain/)
//!     │
//!     └── SQLite Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod seed;
pub mod serialization;
pub mod service;
pub mod telemetry;
