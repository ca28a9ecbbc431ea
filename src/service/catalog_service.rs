//! Catalog service: retrieval, deletion, and association creation.

use crate::domain::{
    EntityKind, NewRestaurantPizza, Pizza, Restaurant, RestaurantDetail, RestaurantId,
    RestaurantPizzaDetail, RestaurantPizzaInput, ValidationError,
};
use crate::error::ApiError;
use crate::persistence::{SqliteStore, TableCounts, queries};

/// Orchestration layer for every catalog operation.
///
/// Stateless coordinator over a [`SqliteStore`]. Reads run on one pooled
/// connection; writes run in one transaction that commits only after every
/// check passed. An early return drops the transaction, which rolls it back.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: SqliteStore,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`SqliteStore`].
    #[must_use]
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Returns every restaurant ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let mut conn = self.store.acquire().await?;
        Ok(queries::list_restaurants(&mut conn).await?)
    }

    /// Loads a restaurant together with its associations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the restaurant does not exist.
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<RestaurantDetail, ApiError> {
        let mut conn = self.store.acquire().await?;
        let restaurant = queries::find_restaurant(&mut conn, id)
            .await?
            .ok_or(ApiError::NotFound(EntityKind::Restaurant))?;
        let restaurant_pizzas = queries::restaurant_pizzas_for(&mut conn, id).await?;

        Ok(RestaurantDetail {
            restaurant,
            restaurant_pizzas,
        })
    }

    /// Deletes a restaurant and every association it owns.
    ///
    /// Returns the number of associations removed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the restaurant does not exist.
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<u64, ApiError> {
        let mut tx = self.store.begin().await?;

        if queries::find_restaurant(&mut tx, id).await?.is_none() {
            return Err(ApiError::NotFound(EntityKind::Restaurant));
        }
        let associations_removed = queries::delete_restaurant_pizzas_for(&mut tx, id).await?;
        queries::delete_restaurant(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(restaurant_id = %id, associations_removed, "restaurant deleted");
        Ok(associations_removed)
    }

    /// Returns every pizza ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, ApiError> {
        let mut conn = self.store.acquire().await?;
        Ok(queries::list_pizzas(&mut conn).await?)
    }

    /// Validates and persists a new association.
    ///
    /// Checks run in order: restaurant exists, pizza exists, price in
    /// range. The row is inserted only after all of them pass.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an unknown restaurant or pizza
    /// or an out-of-range price, and [`ApiError::CreationFailed`] for any
    /// store failure.
    pub async fn create_restaurant_pizza(
        &self,
        input: RestaurantPizzaInput,
    ) -> Result<RestaurantPizzaDetail, ApiError> {
        match self.insert_restaurant_pizza(input).await {
            Ok(detail) => {
                tracing::info!(
                    restaurant_pizza_id = %detail.restaurant_pizza.id,
                    restaurant_id = %detail.restaurant.id,
                    pizza_id = %detail.pizza.id,
                    price = detail.restaurant_pizza.price,
                    "restaurant_pizza created"
                );
                Ok(detail)
            }
            Err(err) => {
                tracing::warn!(
                    restaurant_id = %input.restaurant_id,
                    pizza_id = %input.pizza_id,
                    price = input.price,
                    error = %err,
                    "restaurant_pizza rejected"
                );
                Err(err)
            }
        }
    }

    async fn insert_restaurant_pizza(
        &self,
        input: RestaurantPizzaInput,
    ) -> Result<RestaurantPizzaDetail, ApiError> {
        let mut tx = self.store.begin().await.map_err(creation_failed)?;

        let restaurant = queries::find_restaurant(&mut tx, input.restaurant_id)
            .await
            .map_err(creation_failed)?
            .ok_or(ValidationError::NotFound(EntityKind::Restaurant))?;
        let pizza = queries::find_pizza(&mut tx, input.pizza_id)
            .await
            .map_err(creation_failed)?
            .ok_or(ValidationError::NotFound(EntityKind::Pizza))?;

        let new = NewRestaurantPizza::new(input.price, &restaurant, &pizza)?;
        let restaurant_pizza = queries::insert_restaurant_pizza(&mut tx, &new)
            .await
            .map_err(creation_failed)?;
        tx.commit().await.map_err(creation_failed)?;

        Ok(RestaurantPizzaDetail {
            restaurant_pizza,
            pizza,
            restaurant,
        })
    }

    /// Returns the row counts of all tables.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn counts(&self) -> Result<TableCounts, ApiError> {
        let mut conn = self.store.acquire().await?;
        Ok(queries::table_counts(&mut conn).await?)
    }
}

/// Logs a store failure inside the creation flow and hides it from the
/// client.
fn creation_failed(err: sqlx::Error) -> ApiError {
    tracing::error!(error = %err, "restaurant_pizza creation failed");
    ApiError::CreationFailed(EntityKind::RestaurantPizza)
}
