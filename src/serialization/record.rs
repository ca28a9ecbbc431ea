//! Conversion of entity graphs into nested field maps.
//!
//! The relation graph is cyclic (restaurant → association → restaurant), so
//! nesting is bounded by the types rather than by a depth counter: nested
//! values are always produced from the bare row types ([`Restaurant`],
//! [`Pizza`], [`RestaurantPizza`]), which hold no relation data and cannot
//! expand further.

use serde_json::Value;

use super::{FieldFilter, Record};
use crate::domain::{Pizza, Restaurant, RestaurantDetail, RestaurantPizza, RestaurantPizzaDetail};

/// Scalar fields of a restaurant.
pub const RESTAURANT_FIELDS: &[&str] = &["id", "name", "address"];

/// Opt-in relation key on a restaurant.
pub const RESTAURANT_PIZZAS: &str = "restaurant_pizzas";

/// Fields returned by single-restaurant retrieval.
pub const RESTAURANT_DETAIL_FIELDS: &[&str] = &["id", "name", "address", RESTAURANT_PIZZAS];

/// Scalar fields of a pizza.
pub const PIZZA_FIELDS: &[&str] = &["id", "name", "ingredients"];

/// Scalar fields of an association. Also the restricted set used when
/// associations are nested under a restaurant.
pub const RESTAURANT_PIZZA_FIELDS: &[&str] = &["id", "price", "pizza_id", "restaurant_id"];

/// Fields returned after creating an association.
pub const RESTAURANT_PIZZA_DETAIL_FIELDS: &[&str] = &[
    "id",
    "price",
    "pizza_id",
    "restaurant_id",
    "pizza",
    "restaurant",
];

/// Serializes a value into a [`Record`], honouring a [`FieldFilter`].
pub trait ToRecord {
    /// Builds the full record for this value, then applies `filter`.
    fn to_record(&self, filter: FieldFilter<'_>) -> Record;
}

impl ToRecord for Restaurant {
    fn to_record(&self, filter: FieldFilter<'_>) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::from(self.id.get()));
        record.insert("name".to_string(), Value::from(self.name.as_str()));
        record.insert("address".to_string(), Value::from(self.address.as_str()));
        filter.apply(record)
    }
}

impl ToRecord for Pizza {
    fn to_record(&self, filter: FieldFilter<'_>) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::from(self.id.get()));
        record.insert("name".to_string(), Value::from(self.name.as_str()));
        record.insert(
            "ingredients".to_string(),
            Value::from(self.ingredients.as_str()),
        );
        filter.apply(record)
    }
}

impl ToRecord for RestaurantPizza {
    fn to_record(&self, filter: FieldFilter<'_>) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::from(self.id.get()));
        record.insert("price".to_string(), Value::from(self.price));
        record.insert("pizza_id".to_string(), Value::from(self.pizza_id.get()));
        record.insert(
            "restaurant_id".to_string(),
            Value::from(self.restaurant_id.get()),
        );
        filter.apply(record)
    }
}

impl ToRecord for RestaurantDetail {
    fn to_record(&self, filter: FieldFilter<'_>) -> Record {
        let mut record = self.restaurant.to_record(FieldFilter::Defaults);
        if filter.requests(RESTAURANT_PIZZAS) {
            let nested = self
                .restaurant_pizzas
                .iter()
                .map(|rp| Value::Object(rp.to_record(FieldFilter::only(RESTAURANT_PIZZA_FIELDS))))
                .collect();
            record.insert(RESTAURANT_PIZZAS.to_string(), Value::Array(nested));
        }
        filter.apply(record)
    }
}

impl ToRecord for RestaurantPizzaDetail {
    fn to_record(&self, filter: FieldFilter<'_>) -> Record {
        let mut record = self.restaurant_pizza.to_record(FieldFilter::Defaults);
        if filter.admits("pizza") {
            record.insert(
                "pizza".to_string(),
                Value::Object(self.pizza.to_record(FieldFilter::Defaults)),
            );
        }
        if filter.admits("restaurant") {
            record.insert(
                "restaurant".to_string(),
                Value::Object(self.restaurant.to_record(FieldFilter::Defaults)),
            );
        }
        filter.apply(record)
    }
}

/// Serializes each item of `items` with the same filter.
#[must_use]
pub fn to_records<'a, T, I>(items: I, filter: FieldFilter<'_>) -> Vec<Value>
where
    T: ToRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| Value::Object(item.to_record(filter)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{PizzaId, RestaurantId, RestaurantPizzaId};

    fn karens() -> Restaurant {
        Restaurant {
            id: RestaurantId::new(1),
            name: "Karen's Pizza Shack".to_string(),
            address: "address1".to_string(),
        }
    }

    fn emma() -> Pizza {
        Pizza {
            id: PizzaId::new(1),
            name: "Emma".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    fn offer(id: i64, price: i64) -> RestaurantPizza {
        RestaurantPizza {
            id: RestaurantPizzaId::new(id),
            price,
            pizza_id: PizzaId::new(1),
            restaurant_id: RestaurantId::new(1),
        }
    }

    fn keys(record: &Record) -> Vec<&str> {
        record.keys().map(String::as_str).collect()
    }

    #[test]
    fn restaurant_defaults_to_scalars() {
        let record = karens().to_record(FieldFilter::Defaults);
        assert_eq!(keys(&record), vec!["id", "name", "address"]);
        assert_eq!(record.get("name"), Some(&Value::from("Karen's Pizza Shack")));
    }

    #[test]
    fn restaurant_detail_expands_only_on_request() {
        let detail = RestaurantDetail {
            restaurant: karens(),
            restaurant_pizzas: vec![offer(1, 5), offer(2, 9)],
        };

        let plain = detail.to_record(FieldFilter::Defaults);
        assert!(!plain.contains_key(RESTAURANT_PIZZAS));

        let expanded = detail.to_record(FieldFilter::only(RESTAURANT_DETAIL_FIELDS));
        assert_eq!(
            keys(&expanded),
            vec!["id", "name", "address", RESTAURANT_PIZZAS]
        );
        let Some(Value::Array(nested)) = expanded.get(RESTAURANT_PIZZAS) else {
            panic!("restaurant_pizzas should be an array");
        };
        assert_eq!(nested.len(), 2);
    }

    #[test]
    fn nested_associations_never_renest() {
        let detail = RestaurantDetail {
            restaurant: karens(),
            restaurant_pizzas: vec![offer(1, 5)],
        };
        let record = detail.to_record(FieldFilter::only(&[
            RESTAURANT_PIZZAS,
            "pizza",
            "restaurant",
        ]));
        let Some(Value::Array(nested)) = record.get(RESTAURANT_PIZZAS) else {
            panic!("restaurant_pizzas should be an array");
        };
        for item in nested {
            let Value::Object(item) = item else {
                panic!("nested association should be an object");
            };
            assert_eq!(keys(item), vec!["id", "price", "pizza_id", "restaurant_id"]);
            assert!(!item.contains_key("pizza"));
            assert!(!item.contains_key("restaurant"));
        }
        assert!(!record.contains_key("pizza"));
    }

    #[test]
    fn association_detail_nests_by_default() {
        let detail = RestaurantPizzaDetail {
            restaurant_pizza: offer(3, 1),
            pizza: emma(),
            restaurant: karens(),
        };
        let record = detail.to_record(FieldFilter::Defaults);
        assert_eq!(
            keys(&record),
            vec!["id", "price", "pizza_id", "restaurant_id", "pizza", "restaurant"]
        );

        let Some(Value::Object(pizza)) = record.get("pizza") else {
            panic!("pizza should be nested");
        };
        assert_eq!(keys(pizza), vec!["id", "name", "ingredients"]);

        let Some(Value::Object(restaurant)) = record.get("restaurant") else {
            panic!("restaurant should be nested");
        };
        assert_eq!(keys(restaurant), vec!["id", "name", "address"]);
        assert!(!restaurant.contains_key(RESTAURANT_PIZZAS));
    }

    #[test]
    fn association_detail_skips_unrequested_relations() {
        let detail = RestaurantPizzaDetail {
            restaurant_pizza: offer(3, 1),
            pizza: emma(),
            restaurant: karens(),
        };
        let record = detail.to_record(FieldFilter::only(&["id", "price", "pizza"]));
        assert_eq!(keys(&record), vec!["id", "price", "pizza"]);
    }

    #[test]
    fn pizza_list_uses_shared_filter() {
        let pizzas = [emma()];
        let values = to_records(&pizzas, FieldFilter::only(PIZZA_FIELDS));
        assert_eq!(
            values,
            vec![serde_json::json!({
                "id": 1,
                "name": "Emma",
                "ingredients": "Dough, Tomato Sauce, Cheese",
            })]
        );
    }
}
