//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the users table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL
);
"#;

pub const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?1, ?2)";

pub const SELECT_USER_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = ?1";

pub const SELECT_ALL_USERS: &str = "SELECT id, name, email FROM users ORDER BY id";

pub const UPDATE_USER: &str = "UPDATE users SET name = ?2, email = ?3 WHERE id = ?1";

pub const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";
