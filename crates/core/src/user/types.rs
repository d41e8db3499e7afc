use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A persisted user row.
///
/// The `id` is assigned by storage on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Every user keyed by id, as returned by the list endpoint.
///
/// Serializes as `{"users": {"<id>": {...}, ...}}`. JSON object keys are
/// strings, so ids appear quoted in the keys and as numbers in the values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectory {
    pub users: BTreeMap<i64, User>,
}

impl UserDirectory {
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().map(|user| (user.id, user)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_flat() {
        let user = User::new(1, "Alice", "a@x.com");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_directory_keys_users_by_id() {
        let directory: UserDirectory = vec![
            User::new(2, "Bob", "b@x.com"),
            User::new(10, "Carol", "c@x.com"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&directory).unwrap();

        assert_eq!(json["users"]["2"]["name"], "Bob");
        assert_eq!(json["users"]["10"]["id"], 10);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_empty_directory_serializes_empty_object() {
        let directory = UserDirectory::default();
        let json = serde_json::to_string(&directory).unwrap();

        assert!(directory.is_empty());
        assert_eq!(json, r#"{"users":{}}"#);
    }

    #[test]
    fn test_directory_deserializes_string_keys() {
        let json = r#"{"users":{"7":{"id":7,"name":"Dan","email":"d@x.com"}}}"#;
        let directory: UserDirectory = serde_json::from_str(json).unwrap();

        assert_eq!(
            directory.users.get(&7),
            Some(&User::new(7, "Dan", "d@x.com"))
        );
    }
}
