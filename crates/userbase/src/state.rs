//! Application state shared by every request handler.

use std::sync::Arc;

use userbase_core::storage::UserRepository;

use crate::config::Config;
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository is the only owner of
/// the database handle and is injected here rather than reached through a
/// global.
#[derive(Clone)]
pub struct AppState {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
    /// Answer a missing user lookup with 404 instead of 200 `{}`.
    pub strict_not_found: bool,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn new(users: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self {
            users,
            strict_not_found: config.strict_not_found,
        }
    }

    /// Opens the SQLite database named in the configuration.
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqliteRepository::open(&config.database).await?;
        Ok(Self::new(Arc::new(repo), config))
    }

    /// Creates an AppState backed by an in-memory SQLite database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let repo = SqliteRepository::open_in_memory()
            .await
            .expect("in-memory SQLite should open");
        Self::new(Arc::new(repo), &Config::default())
    }
}
