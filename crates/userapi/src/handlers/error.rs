use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use userapi_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error: any error, rendered as `{"status": "error", "message": ...}`.
pub struct AppError(pub anyhow::Error);

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            rejection.status()
        } else if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            rejection.status()
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = self.0.to_string();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %message, "Request rejected");
        }

        let body = ErrorBody {
            status: "error",
            message,
        };

        (status_code, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_404_with_message() {
        let (status, body) = render(RepositoryError::user_not_found(3).into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "User with ID 3 not found");
    }

    #[tokio::test]
    async fn test_connection_failed_renders_503() {
        let err: AppError = RepositoryError::ConnectionFailed("db down".to_string()).into();
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_unknown_error_renders_500() {
        let err = AppError(anyhow::anyhow!("boom"));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "boom");
    }
}
