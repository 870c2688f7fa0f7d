//! HTTP client for the userapi service.

pub mod health;
pub mod users;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Default server address for the CLI `--base-url` flag.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client for the userapi service.
#[derive(Debug, Clone)]
pub struct UserApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error payload returned by the server: `{"status": "error", "message": ...}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts the human readable message from an error response body.
///
/// Falls back to the raw body when it is not the server's JSON error shape.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

impl UserApiClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into the matching `ClientError`.
    async fn error_from_response(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        if status == reqwest::StatusCode::NOT_FOUND {
            ClientError::NotFound { resource: message }
        } else {
            ClientError::ServerError {
                status: status.as_u16(),
                message,
            }
        }
    }

    /// Decode a JSON body or map the error status.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                ClientError::InvalidResponse(format!("unexpected body ({e}): {body}"))
            })
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Handle responses whose body is a plain text message.
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = UserApiClient::new("http://localhost:8080");
        assert_eq!(client.url("/api/users"), "http://localhost:8080/api/users");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = UserApiClient::new("http://example.com:9000/");
        assert_eq!(client.base_url(), "http://example.com:9000");
        assert_eq!(client.url("/api/health"), "http://example.com:9000/api/health");
    }

    #[test]
    fn test_error_message_from_json_body() {
        let body = r#"{"status":"error","message":"User with ID 4 not found"}"#;
        assert_eq!(error_message(body), "User with ID 4 not found");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(
            error_message("Invalid URL: Cannot parse `abc` to a `i64`"),
            "Invalid URL: Cannot parse `abc` to a `i64`"
        );
        assert_eq!(error_message(""), "Unknown error");
    }
}
