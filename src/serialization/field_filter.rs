//! Caller-supplied allow-list of output fields.

use super::Record;

/// Selects which fields a serialized record keeps.
///
/// [`FieldFilter::Defaults`] means "the type's default field set".
/// [`FieldFilter::Only`] keeps exactly the listed keys that the type
/// produced; names the type does not know are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldFilter<'a> {
    /// No allow-list was supplied.
    #[default]
    Defaults,
    /// Keep only these keys.
    Only(&'a [&'a str]),
}

impl<'a> FieldFilter<'a> {
    /// Builds a filter from an allow-list. An empty list counts as absent.
    #[must_use]
    pub const fn only(fields: &'a [&'a str]) -> Self {
        if fields.is_empty() {
            Self::Defaults
        } else {
            Self::Only(fields)
        }
    }

    /// `true` if `field` is explicitly listed.
    ///
    /// Opt-in relations (e.g. a restaurant's `restaurant_pizzas`) are only
    /// expanded when requested this way.
    #[must_use]
    pub fn requests(&self, field: &str) -> bool {
        match self {
            Self::Defaults => false,
            Self::Only(fields) => fields.contains(&field),
        }
    }

    /// `true` if `field` survives this filter.
    ///
    /// Default-on relations (an association's `pizza` and `restaurant`) are
    /// expanded whenever this holds.
    #[must_use]
    pub fn admits(&self, field: &str) -> bool {
        match self {
            Self::Defaults => true,
            Self::Only(fields) => fields.contains(&field),
        }
    }

    /// Drops every key of `record` this filter does not admit.
    #[must_use]
    pub fn apply(&self, mut record: Record) -> Record {
        if let Self::Only(fields) = self {
            record.retain(|key, _| fields.contains(&key.as_str()));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample() -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::from(1));
        record.insert("name".to_string(), Value::from("Emma"));
        record
    }

    #[test]
    fn empty_list_means_defaults() {
        assert_eq!(FieldFilter::only(&[]), FieldFilter::Defaults);
    }

    #[test]
    fn defaults_keep_everything_but_request_nothing() {
        let filter = FieldFilter::Defaults;
        assert!(filter.admits("pizza"));
        assert!(!filter.requests("restaurant_pizzas"));
        assert_eq!(filter.apply(sample()).len(), 2);
    }

    #[test]
    fn only_filters_and_ignores_unknown_names() {
        let filter = FieldFilter::only(&["name", "no_such_field"]);
        let record = filter.apply(sample());
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some(&Value::from("Emma")));
        assert!(filter.requests("name"));
        assert!(!filter.admits("id"));
    }
}
