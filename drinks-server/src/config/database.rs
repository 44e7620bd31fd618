use confique::Config;

/// Configuration for the drinks database
#[derive(Debug, Config, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string (default: sqlite://database.db?mode=rwc)
    #[config(env = "DRINKS_DATABASE_URL", default = "sqlite://database.db?mode=rwc")]
    pub url: String,

    /// Maximum number of pooled connections (default: 5)
    #[config(env = "DRINKS_DATABASE_MAX_CONNECTIONS", default = 5)]
    pub max_connections: u32,

    /// Drop and recreate the schema on startup, then insert the demo drink.
    /// All existing records are lost (default: false)
    #[config(env = "DRINKS_DATABASE_RESET_ON_START", default = false)]
    pub reset_on_start: bool,
}
