//! API request types for user operations.
//!
//! Both payloads require every field to be present. Anything the JSON
//! decoder rejects (missing field, wrong type, not JSON at all) is a
//! malformed request and never reaches storage.

use serde::{Deserialize, Serialize};

/// Request payload for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Request payload for replacing a user's name and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

impl UpdateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"name":"Alice","email":"a@x.com"}"#).unwrap();
        assert_eq!(request, CreateUserRequest::new("Alice", "a@x.com"));
    }

    #[test]
    fn test_create_request_missing_email_is_rejected() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"name":"Bob"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_ignores_unknown_fields() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"name":"Alice","email":"a@x.com","id":99}"#).unwrap();
        assert_eq!(request.name, "Alice");
    }

    #[test]
    fn test_update_request_parses() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"name":"Alicia","email":"a@x.com"}"#).unwrap();
        assert_eq!(request, UpdateUserRequest::new("Alicia", "a@x.com"));
    }

    #[test]
    fn test_update_request_rejects_wrong_types() {
        let result = serde_json::from_str::<UpdateUserRequest>(r#"{"name":1,"email":"a@x.com"}"#);
        assert!(result.is_err());
    }
}
