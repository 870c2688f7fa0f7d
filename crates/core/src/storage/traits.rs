use async_trait::async_trait;

use crate::user::{NewUser, User, UserId};

use super::Result;

/// Repository for user operations.
///
/// Implementations own the persisted state. Callers only ever hold copies
/// for the duration of a request.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns it with its freshly assigned ID.
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    /// Gets a user by its ID.
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Lists every stored user. Order is backend-defined.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Overwrites name and email of an existing user.
    ///
    /// Returns `RepositoryError::NotFound` when no row has `user.id`.
    async fn update_user(&self, user: &User) -> Result<User>;

    /// Deletes a user by its ID. Deleting a missing ID is not an error.
    async fn delete_user(&self, id: UserId) -> Result<()>;

    /// Releases the underlying connection or pool.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;

    struct NullRepository;

    #[async_trait]
    impl UserRepository for NullRepository {
        async fn create_user(&self, user: &NewUser) -> Result<User> {
            Ok(User::with_id(1, user.clone()))
        }

        async fn get_user(&self, _id: UserId) -> Result<Option<User>> {
            Ok(None)
        }

        async fn list_users(&self) -> Result<Vec<User>> {
            Ok(Vec::new())
        }

        async fn update_user(&self, user: &User) -> Result<User> {
            Err(RepositoryError::user_not_found(user.id))
        }

        async fn delete_user(&self, _id: UserId) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_default_close_is_noop() {
        let repo: Box<dyn UserRepository> = Box::new(NullRepository);

        assert!(repo.close().await.is_ok());
        assert!(repo.list_users().await.unwrap().is_empty());
    }
}
