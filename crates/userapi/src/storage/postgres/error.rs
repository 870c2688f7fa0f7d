//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `userapi_core::storage`.

use userapi_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool and transport failures → `RepositoryError::ConnectionFailed`
/// - Column decoding failures → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. } => {
            RepositoryError::InvalidData(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a sqlx error for an operation on a known user id.
///
/// `RowNotFound` becomes `RepositoryError::NotFound` carrying that id.
pub fn map_sqlx_error_with_id(err: sqlx::Error, id: impl ToString) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::user_not_found(id),
        _ => map_sqlx_error(err),
    }
}
