//! Row conversions for the SQLite backend.

use rusqlite::Row;

use userapi_core::user::User;

/// Converts a row selected with `id, name, email` into a `User`.
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_user() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let user = conn
            .query_row("SELECT 7, 'John', 'john@x.com'", [], row_to_user)
            .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "John");
        assert_eq!(user.email, "john@x.com");
    }

    #[test]
    fn test_row_to_user_rejects_null_name() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let result = conn.query_row("SELECT 1, NULL, 'a@x.com'", [], row_to_user);

        assert!(result.is_err());
    }
}
