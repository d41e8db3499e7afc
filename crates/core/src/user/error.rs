use thiserror::Error;

/// Errors that can occur when validating user fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("User name cannot be empty")]
    EmptyName,
    #[error("User email cannot be empty")]
    EmptyEmail,
}
