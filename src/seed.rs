//! Database seeding for development and demos.
//!
//! Restaurants and pizzas have no creation endpoint; this module is the only
//! way they enter the store. Two modes:
//!
//! - [`sample_data`]: three fixed restaurants, pizzas and associations.
//! - [`setup_database`]: wipes the tables and loads the fixed rows plus
//!   generated ones, with random associations deduplicated per
//!   (restaurant, pizza) pair.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaId, Restaurant, RestaurantId,
    ValidationError,
};
use crate::persistence::{SqliteStore, TableCounts, queries};

/// Restaurants every seed starts with, as `(name, address)`.
pub const FIXED_RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

/// Pizzas every seed starts with, as `(name, ingredients)`.
pub const FIXED_PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// Prices of the sample associations, pairing the fixed rows index-wise.
const SAMPLE_PRICES: [i64; 3] = [1, 15, 20];

const OWNER_FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chiara", "Dmitri", "Elena", "Farid", "Greta", "Hiro", "Ines", "Jamal",
    "Luca", "Maya", "Nora", "Omar", "Paola", "Rosa", "Sven", "Tariq", "Vera", "Yusuf",
];

const GENERATED_PIZZA_NAMES: [&str; 7] = [
    "Margherita",
    "Hawaiian",
    "Meat Lovers",
    "Veggie Supreme",
    "BBQ Chicken",
    "White Pizza",
    "Buffalo Chicken",
];

const BASE_INGREDIENTS: [&str; 3] = ["Dough", "Tomato Sauce", "Cheese"];

const EXTRA_INGREDIENTS: [&str; 12] = [
    "Pepperoni",
    "Sausage",
    "Mushrooms",
    "Bell Peppers",
    "Onions",
    "Olives",
    "Pineapple",
    "Ham",
    "Chicken",
    "Spinach",
    "Garlic",
    "Basil",
];

/// Seeding failure.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The store rejected a statement.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    /// A generated association failed validation.
    #[error("invalid seed row: {0}")]
    Invalid(#[from] ValidationError),
}

/// Size of the generated part of [`setup_database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    /// Restaurants generated on top of [`FIXED_RESTAURANTS`].
    pub generated_restaurants: usize,
    /// Random associations drawn before deduplication.
    pub random_associations: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            generated_restaurants: 7,
            random_associations: 30,
        }
    }
}

/// Inserts the three fixed restaurants, pizzas and associations in one
/// transaction. Existing rows are kept.
///
/// # Errors
///
/// Returns a [`SeedError`] if any insert fails; nothing is committed then.
pub async fn sample_data(store: &SqliteStore) -> Result<TableCounts, SeedError> {
    let mut tx = store.begin().await?;

    let mut restaurants = Vec::with_capacity(FIXED_RESTAURANTS.len());
    for (name, address) in FIXED_RESTAURANTS {
        let new = NewRestaurant::new(name, address);
        restaurants.push(queries::insert_restaurant(&mut tx, &new).await?);
    }
    let mut pizzas = Vec::with_capacity(FIXED_PIZZAS.len());
    for (name, ingredients) in FIXED_PIZZAS {
        let new = NewPizza::new(name, ingredients);
        pizzas.push(queries::insert_pizza(&mut tx, &new).await?);
    }
    for ((restaurant, pizza), price) in restaurants.iter().zip(&pizzas).zip(SAMPLE_PRICES) {
        let new = NewRestaurantPizza::new(price, restaurant, pizza)?;
        queries::insert_restaurant_pizza(&mut tx, &new).await?;
    }

    let counts = queries::table_counts(&mut tx).await?;
    tx.commit().await?;
    tracing::info!(?counts, "sample data added");
    Ok(counts)
}

/// Clears every table, resets ids, and loads fixed plus generated rows.
///
/// The first association is always Emma at Karen's Pizza Shack for 1. The
/// random ones that repeat an already-used (restaurant, pizza) pair are
/// dropped.
///
/// # Errors
///
/// Returns a [`SeedError`] if any statement fails; nothing is committed
/// then.
pub async fn setup_database<R>(
    store: &SqliteStore,
    options: SeedOptions,
    rng: &mut R,
) -> Result<TableCounts, SeedError>
where
    R: Rng + ?Sized,
{
    let mut tx = store.begin().await?;
    queries::clear_all(&mut tx).await?;

    let mut restaurants: Vec<Restaurant> = Vec::new();
    for new in restaurant_rows(options.generated_restaurants, rng) {
        restaurants.push(queries::insert_restaurant(&mut tx, &new).await?);
    }
    tracing::info!(count = restaurants.len(), "restaurants created");

    let mut pizzas: Vec<Pizza> = Vec::new();
    for new in pizza_rows(rng) {
        pizzas.push(queries::insert_pizza(&mut tx, &new).await?);
    }
    tracing::info!(count = pizzas.len(), "pizzas created");

    let drafts = association_drafts(&restaurants, &pizzas, options.random_associations, rng);
    let mut seen: HashSet<(RestaurantId, PizzaId)> = HashSet::new();
    let mut created = 0_usize;
    for (price, restaurant, pizza) in drafts {
        if !seen.insert((restaurant.id, pizza.id)) {
            continue;
        }
        let new = NewRestaurantPizza::new(price, restaurant, pizza)?;
        queries::insert_restaurant_pizza(&mut tx, &new).await?;
        created += 1;
    }
    tracing::info!(count = created, "restaurant_pizzas created");

    let counts = queries::table_counts(&mut tx).await?;
    tx.commit().await?;
    Ok(counts)
}

fn restaurant_rows<R: Rng + ?Sized>(generated: usize, rng: &mut R) -> Vec<NewRestaurant> {
    let fixed = FIXED_RESTAURANTS
        .iter()
        .map(|(name, address)| NewRestaurant::new(*name, *address));
    let extra = (0..generated).map(|i| {
        let owner = OWNER_FIRST_NAMES.choose(rng).copied().unwrap_or("Tony");
        NewRestaurant::new(
            format!("{owner}'s Pizza"),
            format!("address{}", FIXED_RESTAURANTS.len() + i + 1),
        )
    });
    fixed.chain(extra).collect()
}

fn pizza_rows<R: Rng + ?Sized>(rng: &mut R) -> Vec<NewPizza> {
    let fixed = FIXED_PIZZAS
        .iter()
        .map(|(name, ingredients)| NewPizza::new(*name, *ingredients));
    let extra = GENERATED_PIZZA_NAMES.iter().map(|name| {
        let extras = rng.gen_range(1..=4);
        let ingredients: Vec<&str> = BASE_INGREDIENTS
            .iter()
            .chain(EXTRA_INGREDIENTS.choose_multiple(rng, extras))
            .copied()
            .collect();
        NewPizza::new(*name, ingredients.join(", "))
    });
    fixed.chain(extra).collect()
}

/// The pinned first association followed by `count` random ones.
fn association_drafts<'a, R: Rng + ?Sized>(
    restaurants: &'a [Restaurant],
    pizzas: &'a [Pizza],
    count: usize,
    rng: &mut R,
) -> Vec<(i64, &'a Restaurant, &'a Pizza)> {
    let mut drafts = Vec::with_capacity(count + 1);
    if let (Some(restaurant), Some(pizza)) = (restaurants.first(), pizzas.first()) {
        drafts.push((1, restaurant, pizza));
    }
    for _ in 0..count {
        let price = rng.gen_range(1..=30);
        if let (Some(restaurant), Some(pizza)) = (restaurants.choose(rng), pizzas.choose(rng)) {
            drafts.push((price, restaurant, pizza));
        }
    }
    drafts
}
