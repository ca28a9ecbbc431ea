//! Validated association price.

use std::fmt;

use serde::Serialize;

use super::ValidationError;

/// Price a restaurant charges for a pizza, in whole currency units.
///
/// Only constructible through [`Price::new`], so every value in circulation
/// lies in `[Price::MIN, Price::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Cheapest allowed price.
    pub const MIN: i64 = 1;
    /// Most expensive allowed price.
    pub const MAX: i64 = 30;

    /// Validates `value` against the inclusive price bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RangeViolation`] when `value` is below
    /// [`Price::MIN`] or above [`Price::MAX`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::RangeViolation {
                field: "price",
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw price.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Price {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
