use serde::{Deserialize, Serialize};

/// Identifier assigned to a user by the storage layer.
pub type UserId = i64;

/// A persisted user.
///
/// The `id` is handed out by the repository when the row is inserted and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// A user that has not been stored yet.
///
/// Used both as the create payload and as the set of changes applied by an
/// update. Missing fields deserialize to empty strings and an `id` sent by the
/// client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl User {
    /// Builds the stored form of `new_user` once the backend has assigned `id`.
    pub fn with_id(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
        }
    }
}
