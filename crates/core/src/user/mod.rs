mod error;
mod operations;
mod requests;
mod types;

pub use error::UserError;
pub use operations::validate_user_fields;
pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use types::{User, UserDirectory};
