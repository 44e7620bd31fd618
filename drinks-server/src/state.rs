use crate::auth::TokenVerifier;
use crate::config::AppConfig;
use crate::store::{DrinkStore, SqliteStore};
use log::warn;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn DrinkStore>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Connects to the database and prepares token verification
    pub async fn new(config: AppConfig) -> Result<Self, std::io::Error> {
        let store = SqliteStore::connect(&config.database)
            .await
            .map_err(|e| std::io::Error::other(format!("Failed to open database: {e}")))?;

        if config.database.reset_on_start {
            warn!("Resetting drinks database, all existing records are dropped");
            store
                .reset()
                .await
                .map_err(|e| std::io::Error::other(format!("Failed to reset database: {e}")))?;
        }

        Self::with_store(config, Arc::new(store))
    }

    /// Builds the state around an existing store
    pub fn with_store(
        config: AppConfig,
        store: Arc<dyn DrinkStore>,
    ) -> Result<Self, std::io::Error> {
        let verifier = TokenVerifier::new(&config.auth).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid auth configuration: {e}"),
            )
        })?;

        Ok(Self {
            config: Arc::new(config),
            store,
            verifier: Arc::new(verifier),
        })
    }
}
