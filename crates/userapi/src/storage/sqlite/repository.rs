//! SQLite repository implementation.
//!
//! Implements `UserRepository` from `userapi_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use userapi_core::storage::{RepositoryError, Result, UserRepository};
use userapi_core::user::{NewUser, User, UserId};

use super::conversions::row_to_user;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on tokio-rusqlite's dedicated connection thread.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The users table is created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let name = user.name.clone();
        let email = user.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_USER, rusqlite::params![name, email])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(User { id, name, email })
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_USERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_user).map_err(wrap_err)?;

                let mut users = Vec::new();
                for row_result in rows {
                    users.push(row_result.map_err(wrap_err)?);
                }
                Ok(users)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        let updated = user.clone();
        let user_id = user.id;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_USER,
                        rusqlite::params![updated.id, updated.name, updated.email],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(updated)
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, user_id))
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        self.conn
            .call(move |conn| {
                // A missing row is not an error.
                conn.execute(schema::DELETE_USER, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_user_create_assigns_id() {
        let repo = setup().await;

        let user = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.name, "John");
        assert_eq!(user.email, "john@x.com");
    }

    #[tokio::test]
    async fn test_user_create_and_get() {
        let repo = setup().await;
        let created = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();

        let retrieved = repo.get_user(created.id).await.unwrap();

        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_user_get_nonexistent() {
        let repo = setup().await;

        let result = repo.get_user(999).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_user_list() {
        let repo = setup().await;
        let mut created = Vec::new();
        for i in 0..3 {
            let user = repo
                .create_user(&NewUser::new(format!("user{i}"), format!("user{i}@x.com")))
                .await
                .unwrap();
            created.push(user);
        }

        let users = repo.list_users().await.unwrap();

        assert_eq!(users.len(), 3);
        for user in &created {
            assert!(users.contains(user));
        }
    }

    #[tokio::test]
    async fn test_user_list_empty() {
        let repo = setup().await;

        assert!(repo.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_update() {
        let repo = setup().await;
        let mut user = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();

        user.name = "Johnny".to_string();
        user.email = "johnny@x.com".to_string();
        let updated = repo.update_user(&user).await.unwrap();

        assert_eq!(updated, user);
        let retrieved = repo.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(retrieved.id, user.id);
        assert_eq!(retrieved.name, "Johnny");
        assert_eq!(retrieved.email, "johnny@x.com");
    }

    #[tokio::test]
    async fn test_user_update_nonexistent() {
        let repo = setup().await;
        let user = User::with_id(77, NewUser::new("Ghost", "ghost@x.com"));

        let result = repo.update_user(&user).await;

        assert_eq!(result, Err(RepositoryError::user_not_found(77)));
    }

    #[tokio::test]
    async fn test_user_delete() {
        let repo = setup().await;
        let user = repo
            .create_user(&NewUser::new("John", "john@x.com"))
            .await
            .unwrap();

        repo.delete_user(user.id).await.unwrap();

        assert!(repo.get_user(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_delete_nonexistent_is_ok() {
        let repo = setup().await;

        assert!(repo.delete_user(12345).await.is_ok());
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let path = std::env::temp_dir().join(format!("userapi-test-{}.db", std::process::id()));
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        let created = {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.create_user(&NewUser::new("John", "john@x.com"))
                .await
                .unwrap()
        };

        let repo = SqliteRepository::new(&path_str).await.unwrap();
        let retrieved = repo.get_user(created.id).await.unwrap();
        assert_eq!(retrieved, Some(created));

        drop(repo);
        let _ = std::fs::remove_file(&path);
    }
}
