use async_trait::async_trait;

use crate::user::User;

use super::Result;

/// Repository for user operations.
///
/// Every method maps to exactly one storage statement.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Ensures the users table exists. Safe to call repeatedly.
    async fn init_schema(&self) -> Result<()>;

    /// Lists every user, ordered by id.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Gets a user by id, `None` when no row matches.
    async fn get_user(&self, id: i64) -> Result<Option<User>>;

    /// Inserts a user and returns the id storage assigned to it.
    ///
    /// Fails with `ConstraintViolation` on an empty field or a duplicate email.
    async fn create_user(&self, name: &str, email: &str) -> Result<i64>;

    /// Replaces the name and email of an existing user.
    ///
    /// Fails with `NotFound` when the id does not exist and with
    /// `ConstraintViolation` on an empty field or a duplicate email.
    async fn update_user(&self, id: i64, name: &str, email: &str) -> Result<bool>;

    /// Deletes a user, returning whether a row was removed.
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// Round-trips a trivial statement to check the storage is reachable.
    async fn ping(&self) -> Result<()>;
}
