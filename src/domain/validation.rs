//! Validation failures raised while building an association.

use super::EntityKind;

/// Why a `POST /restaurant_pizzas` request was rejected.
///
/// Every variant is a request-input problem and is reported to the client
/// as `400 Bad Request` with its [`std::fmt::Display`] text in the
/// `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required inputs were absent or `null`.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingField(Vec<&'static str>),

    /// The body could not be read as a JSON object of integers.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A referenced restaurant or pizza does not exist.
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// A numeric input fell outside its allowed inclusive range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    RangeViolation {
        /// Offending field name.
        field: &'static str,
        /// Rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            ValidationError::MissingField(vec!["price", "pizza_id"]).to_string(),
            "Missing required fields: price, pizza_id"
        );
        assert_eq!(
            ValidationError::NotFound(EntityKind::Pizza).to_string(),
            "Pizza not found"
        );
        assert_eq!(
            ValidationError::RangeViolation {
                field: "price",
                value: 31,
                min: 1,
                max: 30,
            }
            .to_string(),
            "price must be between 1 and 30, got 31"
        );
    }
}
