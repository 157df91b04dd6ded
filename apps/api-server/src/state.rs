//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::BlogService;
use scribe_core::ports::BlogRepository;
use scribe_infra::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
use scribe_infra::{PostgresBlogRepository, database::connect};

/// Which store the service is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(feature = "postgres"), allow(dead_code))]
pub enum StorageBackend {
    Postgres,
    InMemory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::InMemory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService,
    pub storage: StorageBackend,
}

impl AppState {
    /// Build the application state with the appropriate store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (repo, storage): (Arc<dyn BlogRepository>, StorageBackend) = {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(conn) => (
                        Arc::new(PostgresBlogRepository::new(conn)),
                        StorageBackend::Postgres,
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory store.",
                            e
                        );
                        (Arc::new(InMemoryBlogRepository::new()), StorageBackend::InMemory)
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running on the in-memory store.");
                (Arc::new(InMemoryBlogRepository::new()), StorageBackend::InMemory)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repo, storage): (Arc<dyn BlogRepository>, StorageBackend) = {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
            (Arc::new(InMemoryBlogRepository::new()), StorageBackend::InMemory)
        };

        tracing::info!(storage = storage.as_str(), "Application state initialized");

        Self::with_repository(repo, storage)
    }

    pub fn with_repository(repo: Arc<dyn BlogRepository>, storage: StorageBackend) -> Self {
        Self {
            blogs: BlogService::new(repo),
            storage,
        }
    }

    /// State backed by a fresh in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_repository(
            Arc::new(InMemoryBlogRepository::new()),
            StorageBackend::InMemory,
        )
    }
}
