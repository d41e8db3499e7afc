mod body;
pub mod error;
pub mod health;
pub mod root;
pub mod users;

pub use error::ApiError;
