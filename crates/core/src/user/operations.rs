use super::types::{NewUser, User};

/// Copies the mutable fields of `changes` onto `existing`.
///
/// The id of `existing` is kept; name and email are replaced as-is, including
/// with empty strings.
pub fn apply_changes(existing: User, changes: NewUser) -> User {
    User {
        id: existing.id,
        name: changes.name,
        email: changes.email,
    }
}
