//! User API operations.

use super::UserApiClient;
use crate::error::Result;
use userapi_core::user::{NewUser, User, UserId};

impl UserApiClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.client.get(self.url("/api/users")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new user.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let response = self
            .client
            .post(self.url("/api/users"))
            .json(&NewUser::new(name, email))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User> {
        let response = self
            .client
            .get(self.url(&format!("/api/users/{id}")))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace the name and email of an existing user.
    pub async fn update_user(&self, id: UserId, name: &str, email: &str) -> Result<User> {
        let response = self
            .client
            .put(self.url(&format!("/api/users/{id}")))
            .json(&NewUser::new(name, email))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete user by ID, returning the server's confirmation message.
    pub async fn delete_user(&self, id: UserId) -> Result<String> {
        let response = self
            .client
            .delete(self.url(&format!("/api/users/{id}")))
            .send()
            .await?;
        self.handle_text_response(response).await
    }
}
