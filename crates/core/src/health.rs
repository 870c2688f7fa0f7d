use serde::{Deserialize, Serialize};

/// Payload returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    /// The fixed answer of a running service. It does not depend on storage.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Application is running".to_string(),
        }
    }
}
