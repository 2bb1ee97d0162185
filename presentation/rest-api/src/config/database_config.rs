use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;
use thiserror::Error;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.database_url_missing")]
    DatabaseUrlMissing,
    #[error("config.invalid_max_connections: {0}")]
    InvalidMaxConnections(String),
}

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding SQL migrations
///   (default: "infrastructure/persistence/migrations")
pub struct DatabaseSettings {
    pub config: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_vars(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::DatabaseUrlMissing)?;

        let mut config = DatabaseConfig::new(url);
        if let Some(raw) = max_connections {
            let max = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidMaxConnections(raw.clone()))?;
            config = config.with_max_connections(max);
        }

        Ok(Self {
            config,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Initialize database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection fails or a migration cannot be applied
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!(migrations_path = %settings.migrations_path, "database migrations applied");
    Ok(pool)
}
