//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userapi_core::storage::{RepositoryError, Result, UserRepository};
use userapi_core::user::{NewUser, User, UserId};

/// In-memory storage backend.
///
/// Uses a `BTreeMap` wrapped in `Arc<RwLock<_>>` for thread-safe access, so
/// listing returns users in ascending id order. Data is not persisted and
/// will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = User::with_id(id, user.clone());

        let mut users = self.users.write().await;
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(stored) => {
                stored.name = user.name.clone();
                stored.email = user.email.clone();
                Ok(stored.clone())
            }
            None => Err(RepositoryError::user_not_found(user.id)),
        }
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        let mut users = self.users.write().await;
        users.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_create_assigns_increasing_ids() {
        let repo = InMemoryRepository::new();

        let first = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();
        let second = repo
            .create_user(&NewUser::new("Jane", "jane@x.com"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, "John");
        assert_eq!(first.email, "john@x.com");
    }

    #[tokio::test]
    async fn test_user_create_and_get() {
        let repo = InMemoryRepository::new();
        let created = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();

        let retrieved = repo.get_user(created.id).await.unwrap();
        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_user_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_user(404).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_user_list_returns_every_user() {
        let repo = InMemoryRepository::new();
        for i in 0..3 {
            repo.create_user(&NewUser::new(format!("user{i}"), format!("user{i}@x.com")))
                .await
                .unwrap();
        }

        let users = repo.list_users().await.unwrap();
        assert_eq!(users.len(), 3);
        assert!(users.iter().any(|u| u.name == "user1"));
    }

    #[tokio::test]
    async fn test_user_update_keeps_id() {
        let repo = InMemoryRepository::new();
        let mut user = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();

        user.name = "Johnny".to_string();
        user.email = "johnny@x.com".to_string();
        let updated = repo.update_user(&user).await.unwrap();

        assert_eq!(updated, user);
        let retrieved = repo.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Johnny");
        assert_eq!(retrieved.email, "johnny@x.com");
    }

    #[tokio::test]
    async fn test_user_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let user = User::with_id(9, NewUser::new("Ghost", "ghost@x.com"));

        let result = repo.update_user(&user).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_user_delete() {
        let repo = InMemoryRepository::new();
        let user = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();

        repo.delete_user(user.id).await.unwrap();

        assert!(repo.get_user(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_delete_nonexistent_is_ok() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete_user(12345).await.is_ok());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::new();
        let first = repo.create_user(&NewUser::new("a", "a@x.com")).await.unwrap();
        repo.delete_user(first.id).await.unwrap();

        let second = repo.create_user(&NewUser::new("b", "b@x.com")).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
