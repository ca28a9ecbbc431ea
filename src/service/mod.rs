//! Service layer: business logic orchestration.
//!
//! [`CatalogService`] owns the transaction scope of every operation and
//! turns store results into domain outcomes.

pub mod catalog_service;

pub use catalog_service::CatalogService;
