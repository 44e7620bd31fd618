use crate::models::{Drink, NewDrink};
use thiserror::Error;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A drink titled '{0}' already exists")]
    DuplicateTitle(String),
    #[error("Drink {0} does not exist")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to (de)serialize recipe: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence interface for drinks.
///
/// Every operation is a single statement, so each one is atomic on its own;
/// nothing here coordinates across requests. Title uniqueness is the
/// backend's responsibility and surfaces as [`StoreError::DuplicateTitle`].
#[async_trait::async_trait]
pub trait DrinkStore: Send + Sync {
    /// All drinks, ordered by id
    async fn list(&self) -> Result<Vec<Drink>, StoreError>;

    /// A single drink, if it exists
    async fn get(&self, id: i64) -> Result<Option<Drink>, StoreError>;

    /// Persist a new drink and return it with its assigned id
    async fn insert(&self, drink: NewDrink) -> Result<Drink, StoreError>;

    /// Overwrite the title and recipe of an existing drink
    async fn update(&self, drink: &Drink) -> Result<(), StoreError>;

    /// Remove a drink, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Drop all drinks, recreate the schema and insert the demo drink
    async fn reset(&self) -> Result<(), StoreError>;

    /// Returns Ok(()) if the backend answers queries
    async fn health_check(&self) -> Result<(), String>;
}
