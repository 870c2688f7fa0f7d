//! Health check operations.

use super::UserApiClient;
use crate::error::Result;
use userapi_core::health::HealthStatus;

impl UserApiClient {
    /// Check that the server is running.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        self.handle_response(response).await
    }
}
