//! PostgreSQL repository implementation.
//!
//! Implements `UserRepository` from `userapi_core::storage` using PostgreSQL.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use userapi_core::storage::{RepositoryError, Result, UserRepository};
use userapi_core::user::{NewUser, User, UserId};

use super::conversions::{row_to_user, UserRow};
use super::error::{map_sqlx_error, map_sqlx_error_with_id};
use super::schema;

/// PostgreSQL-based repository implementation.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects to `url` with a pool of at most `max_connections` connections.
    ///
    /// The users table is created if it does not exist.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>(schema::INSERT_USER)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row_to_user(row))
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(schema::SELECT_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_user))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(schema::SELECT_ALL_USERS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>(schema::UPDATE_USER)
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error_with_id(e, user.id))?;

        Ok(row_to_user(row))
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        sqlx::query(schema::DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}
