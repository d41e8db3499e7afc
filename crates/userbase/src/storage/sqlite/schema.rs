//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O. Every value
//! is bound through a positional parameter.

/// SQL statement to create the users table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
);
"#;

pub const SELECT_ALL_USERS: &str = r#"
SELECT id, name, email
FROM users
ORDER BY id ASC
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, name, email
FROM users
WHERE id = ?1
"#;

pub const INSERT_USER: &str = r#"
INSERT INTO users (name, email)
VALUES (?1, ?2)
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET name = ?2, email = ?3
WHERE id = ?1
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM users
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_ddl() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
        assert!(CREATE_TABLES.contains("email TEXT NOT NULL UNIQUE"));
    }

    #[test]
    fn test_queries_are_parameterized() {
        assert!(SELECT_USER_BY_ID.contains("?1"));
        assert!(INSERT_USER.contains("?1, ?2"));
        assert!(UPDATE_USER.contains("WHERE id = ?1"));
        assert!(DELETE_USER.contains("WHERE id = ?1"));
    }

    #[test]
    fn test_list_query_has_stable_order() {
        assert!(SELECT_ALL_USERS.contains("ORDER BY id"));
    }

    #[test]
    fn test_statements_are_valid_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        for sql in [
            SELECT_ALL_USERS,
            SELECT_USER_BY_ID,
            INSERT_USER,
            UPDATE_USER,
            DELETE_USER,
            PING,
        ] {
            conn.prepare(sql).unwrap();
        }
    }
}
