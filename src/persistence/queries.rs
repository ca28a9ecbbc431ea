//! SQL statements over a single connection.
//!
//! Every function takes `&mut SqliteConnection` so callers decide the scope:
//! a pooled connection for reads, or `&mut *tx` to run inside a
//! transaction.

use sqlx::SqliteConnection;

use super::models::TableCounts;
use crate::domain::{
    EntityKind, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaId, Restaurant,
    RestaurantId, RestaurantPizza,
};

/// Returns every restaurant ordered by id.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn list_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

/// Looks up one restaurant.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn find_restaurant(
    conn: &mut SqliteConnection,
    id: RestaurantId,
) -> Result<Option<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Returns every pizza ordered by id.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn list_pizzas(conn: &mut SqliteConnection) -> Result<Vec<Pizza>, sqlx::Error> {
    sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

/// Looks up one pizza.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn find_pizza(
    conn: &mut SqliteConnection,
    id: PizzaId,
) -> Result<Option<Pizza>, sqlx::Error> {
    sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Returns the associations owned by a restaurant ordered by id.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn restaurant_pizzas_for(
    conn: &mut SqliteConnection,
    restaurant_id: RestaurantId,
) -> Result<Vec<RestaurantPizza>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(
        "SELECT id, price, pizza_id, restaurant_id FROM restaurant_pizzas \
         WHERE restaurant_id = ? ORDER BY id",
    )
    .bind(restaurant_id)
    .fetch_all(&mut *conn)
    .await
}

/// Inserts a restaurant and returns the stored row.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn insert_restaurant(
    conn: &mut SqliteConnection,
    new: &NewRestaurant,
) -> Result<Restaurant, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(
        "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
    )
    .bind(&new.name)
    .bind(&new.address)
    .fetch_one(&mut *conn)
    .await
}

/// Inserts a pizza and returns the stored row.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn insert_pizza(
    conn: &mut SqliteConnection,
    new: &NewPizza,
) -> Result<Pizza, sqlx::Error> {
    sqlx::query_as::<_, Pizza>(
        "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
    )
    .bind(&new.name)
    .bind(&new.ingredients)
    .fetch_one(&mut *conn)
    .await
}

/// Inserts a validated association and returns the stored row.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure, including foreign key
/// violations.
pub async fn insert_restaurant_pizza(
    conn: &mut SqliteConnection,
    new: &NewRestaurantPizza,
) -> Result<RestaurantPizza, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(
        "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?) \
         RETURNING id, price, pizza_id, restaurant_id",
    )
    .bind(new.price().get())
    .bind(new.pizza_id())
    .bind(new.restaurant_id())
    .fetch_one(&mut *conn)
    .await
}

/// Deletes the associations owned by a restaurant, returning how many were
/// removed.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn delete_restaurant_pizzas_for(
    conn: &mut SqliteConnection,
    restaurant_id: RestaurantId,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

/// Deletes one restaurant row, returning how many rows were removed.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn delete_restaurant(
    conn: &mut SqliteConnection,
    id: RestaurantId,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

/// Counts the rows of one table.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn count(conn: &mut SqliteConnection, kind: EntityKind) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(&mut *conn)
        .await
}

/// Counts the rows of all three tables.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn table_counts(conn: &mut SqliteConnection) -> Result<TableCounts, sqlx::Error> {
    Ok(TableCounts {
        restaurants: count(conn, EntityKind::Restaurant).await?,
        pizzas: count(conn, EntityKind::Pizza).await?,
        restaurant_pizzas: count(conn, EntityKind::RestaurantPizza).await?,
    })
}

/// Empties all three tables and restarts their id sequences at 1.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn clear_all(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(
        "DELETE FROM restaurant_pizzas;
         DELETE FROM pizzas;
         DELETE FROM restaurants;
         DELETE FROM sqlite_sequence
             WHERE name IN ('restaurant_pizzas', 'pizzas', 'restaurants');",
    )
    .execute(&mut *conn)
    .await?;
    Ok(())
}
