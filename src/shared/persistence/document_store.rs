use std::env;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::OnceCell;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string is missing or unusable.
    #[error("Store configuration error: {0}")]
    Configuration(String),

    #[error("Store connection error: {0}")]
    Connection(String),
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl StoreConfig {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Reads `DATABASE_URL` and the optional `DB_MAX_CONNECTIONS`.
    /// A missing URL is not an error here; it surfaces on the first `connect`.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let mut config = Self::new(url);

        if let Ok(raw) = env::var("DB_MAX_CONNECTIONS") {
            match raw.parse::<u32>() {
                Ok(n) if n > 0 => config.max_connections = n,
                _ => warn!("Ignoring invalid DB_MAX_CONNECTIONS value: {}", raw),
            }
        }

        config.min_connections = config.min_connections.min(config.max_connections);
        config
    }
}

/// Owns the single process-wide database handle.
///
/// The connection is opened lazily by the first `connect` call; later calls
/// (including concurrent ones racing the first) get the same `Arc`.
pub struct DocumentStore {
    config: StoreConfig,
    handle: OnceCell<Arc<DatabaseConnection>>,
}

impl DocumentStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            handle: OnceCell::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(StoreConfig::from_env())
    }

    /// Wraps an already open connection, e.g. a `MockDatabase` in tests.
    pub fn with_connection(conn: DatabaseConnection) -> Self {
        Self {
            config: StoreConfig::new(None),
            handle: OnceCell::new_with(Some(Arc::new(conn))),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }

    pub async fn connect(&self) -> Result<Arc<DatabaseConnection>, StoreError> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                let url = self.config.url.as_deref().ok_or_else(|| {
                    StoreError::Configuration("DATABASE_URL is not set".to_string())
                })?;

                let mut opt = ConnectOptions::new(url.to_string());
                opt.max_connections(self.config.max_connections)
                    .min_connections(self.config.min_connections)
                    .connect_timeout(self.config.connect_timeout)
                    .acquire_timeout(self.config.acquire_timeout)
                    .idle_timeout(Duration::from_secs(300))
                    .max_lifetime(Duration::from_secs(1800))
                    .sqlx_logging(false);

                let conn = Database::connect(opt)
                    .await
                    .map_err(|e| StoreError::Connection(e.to_string()))?;

                info!(
                    "Document store connected (max_connections={})",
                    self.config.max_connections
                );

                Ok::<_, StoreError>(Arc::new(conn))
            })
            .await?;

        Ok(Arc::clone(handle))
    }
}
