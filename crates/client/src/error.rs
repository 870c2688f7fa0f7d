//! Errors returned by [`crate::UserApiClient`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure before any status code was received.
    #[error("request to userapi failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Any non-404 error status. `message` is the server's error message.
    #[error("userapi answered {status}: {message}")]
    ServerError { status: u16, message: String },

    /// 404 from the server, carrying its message.
    #[error("{resource}")]
    NotFound { resource: String },

    /// A success status whose body is not the expected JSON shape.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}
