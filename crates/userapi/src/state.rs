//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The concrete repository behind the trait object is
//! chosen by the enabled storage feature.

use std::sync::Arc;

use userapi_core::storage::UserRepository;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler and holds the user repository
/// opened at startup.
#[derive(Clone)]
pub struct AppState {
    /// User repository.
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates a new AppState around an already opened repository.
    pub fn with_repository(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Creates AppState backed by a fresh in-memory repository.
    #[cfg(any(test, feature = "inmemory"))]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    /// Releases the repository's connections.
    pub async fn close(&self) -> Result<(), anyhow::Error> {
        self.user_repo.close().await?;
        Ok(())
    }
}

// ============================================================================
// Feature-specific constructors
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_state {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            tracing::info!(path = %config.sqlite_path, "Opened SQLite database");

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "postgres")]
mod postgres_state {
    use super::*;
    use crate::storage::PostgresRepository;

    impl AppState {
        /// Creates AppState with PostgreSQL storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo =
                PostgresRepository::connect(&config.database_url, config.database_max_connections)
                    .await?;
            tracing::info!(
                max_connections = config.database_max_connections,
                "Connected to PostgreSQL"
            );

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_state {
    use super::*;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage, data will not be persisted");

            Ok(Self::in_memory())
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
