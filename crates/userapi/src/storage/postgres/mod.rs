//! PostgreSQL storage backend implementation.
//!
//! This module provides a PostgreSQL-based implementation of `UserRepository`
//! using `sqlx` with a bounded `PgPool`.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
