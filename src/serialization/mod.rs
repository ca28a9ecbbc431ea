//! Serialization layer: entity graphs to plain nested maps.
//!
//! Responses are built as [`Record`]s rather than derived `Serialize`
//! output because the set of keys depends on a caller-supplied allow-list.

pub mod field_filter;
pub mod record;

pub use field_filter::FieldFilter;
pub use record::{ToRecord, to_records};

/// Ordered field name → value map produced for one entity.
pub type Record = serde_json::Map<String, serde_json::Value>;
