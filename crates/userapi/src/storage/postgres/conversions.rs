//! Row conversions for the PostgreSQL backend.

use userapi_core::user::User;

/// Column tuple selected as `id, name, email`.
pub type UserRow = (i64, String, String);

pub fn row_to_user((id, name, email): UserRow) -> User {
    User { id, name, email }
}
