//! Data Transfer Objects for REST request deserialization.
//!
//! Responses are built from [`crate::serialization::Record`]s, so only
//! request bodies need dedicated types.

pub mod restaurant_pizza_dto;

pub use restaurant_pizza_dto::*;
