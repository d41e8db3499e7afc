//! SQLite repository implementation.
//!
//! Implements [`UserRepository`] from `userbase_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use userbase_core::storage::{RepositoryError, Result, UserRepository};
use userbase_core::user::{validate_user_fields, User};

use super::conversions::row_to_user;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based user repository.
///
/// Owns a single `tokio_rusqlite::Connection`. The connection lives on a
/// dedicated thread and runs the submitted closures one at a time, so
/// concurrent handlers are serialized through it and never contend for
/// the database lock themselves.
///
/// Statements are prepared inside each closure and dropped when it
/// returns, which finalizes them on every exit path.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and ensures the schema.
    ///
    /// Failing to open the file is an error. Failing to create the table
    /// is logged and the repository is returned anyway; every later
    /// operation will then report its own failure.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).await.map_err(|e| {
            RepositoryError::StorageUnavailable(format!(
                "Cannot open database {}: {e}",
                path.display()
            ))
        })?;

        tracing::debug!(path = %path.display(), "Opened SQLite database");

        Ok(Self::with_schema(conn).await)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::StorageUnavailable(e.to_string()))?;

        Ok(Self::with_schema(conn).await)
    }

    async fn with_schema(conn: Connection) -> Self {
        let repo = Self { conn };
        if let Err(e) = repo.init_schema().await {
            tracing::error!(error = %e, "Error creating users table");
        }
        repo
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn init_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_USERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_user).map_err(wrap_err)?;

                let mut users = Vec::new();
                for row_result in rows {
                    users.push(row_result.map_err(wrap_err)?);
                }
                Ok(users)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<i64> {
        validate_user_fields(name, email)?;

        let name = name.to_string();
        let email = email.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_USER, rusqlite::params![name, email])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }

    async fn update_user(&self, id: i64, name: &str, email: &str) -> Result<bool> {
        validate_user_fields(name, email)?;

        let name = name.to_string();
        let email = email.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_USER, rusqlite::params![id, name, email])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(true)
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_USER, [id])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }
}
