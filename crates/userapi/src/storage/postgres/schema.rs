//! PostgreSQL schema definitions and SQL query constants.

/// SQL statement to create the users table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)
"#;

pub const INSERT_USER: &str =
    "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";

pub const SELECT_USER_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";

pub const SELECT_ALL_USERS: &str = "SELECT id, name, email FROM users ORDER BY id";

pub const UPDATE_USER: &str =
    "UPDATE users SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email";

pub const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_uses_bigserial() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(CREATE_TABLES.contains("id BIGSERIAL PRIMARY KEY"));
    }

    #[test]
    fn test_create_tables_is_a_single_statement() {
        // Prepared statements reject multiple commands.
        assert!(!CREATE_TABLES.contains(';'));
    }

    #[test]
    fn test_writes_return_the_stored_row() {
        for query in [INSERT_USER, UPDATE_USER] {
            assert!(query.ends_with("RETURNING id, name, email"));
        }
    }
}
