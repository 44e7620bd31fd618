use super::{DrinkStore, StoreError};
use crate::config::DatabaseConfig;
use crate::models::{Drink, NewDrink};
use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS drinks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    recipe TEXT NOT NULL
)";

/// SQLite-backed drink store. Recipes are kept as a JSON text blob.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DrinkRow {
    id: i64,
    title: String,
    recipe: String,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = StoreError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        Ok(Drink {
            id: row.id,
            title: row.title,
            recipe: serde_json::from_str(&row.recipe)?,
        })
    }
}

impl SqliteStore {
    /// Connect to the configured database and make sure the schema exists
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let mut options = SqlitePoolOptions::new().max_connections(config.max_connections);

        // An in-memory database lives exactly as long as its connection
        if config.url.contains(":memory:") {
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options.connect(&config.url).await?;
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        info!("Connected to drinks database");

        Ok(Self { pool })
    }

    /// A private, empty in-memory database
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            reset_on_start: false,
        })
        .await
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Maps a failed write, turning unique constraint violations into
/// [`StoreError::DuplicateTitle`]
fn write_error(title: &str, error: sqlx::Error) -> StoreError {
    match error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            StoreError::DuplicateTitle(title.to_string())
        }
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl DrinkStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Drink>, StoreError> {
        sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drinks ORDER BY id")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Drink::try_from)
            .collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Drink>, StoreError> {
        sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drinks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Drink::try_from)
            .transpose()
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, StoreError> {
        let recipe = serde_json::to_string(&drink.recipe)?;
        let result = sqlx::query("INSERT INTO drinks (title, recipe) VALUES (?, ?)")
            .bind(&drink.title)
            .bind(&recipe)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(&drink.title, e))?;

        let id = result.last_insert_rowid();
        debug!("Inserted drink {} '{}'", id, drink.title);
        Ok(Drink {
            id,
            title: drink.title,
            recipe: drink.recipe,
        })
    }

    async fn update(&self, drink: &Drink) -> Result<(), StoreError> {
        let recipe = serde_json::to_string(&drink.recipe)?;
        let result = sqlx::query("UPDATE drinks SET title = ?, recipe = ? WHERE id = ?")
            .bind(&drink.title)
            .bind(&recipe)
            .bind(drink.id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(&drink.title, e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(drink.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DROP TABLE IF EXISTS drinks")
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;

        let water = NewDrink::water();
        sqlx::query("INSERT INTO drinks (title, recipe) VALUES (?, ?)")
            .bind(&water.title)
            .bind(serde_json::to_string(&water.recipe)?)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("Drinks database reset, demo drink inserted");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), String> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| format!("Database query failed: {e}"))
    }
}
