//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `userapi_core::storage`. The implementation used by the server
//! is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `postgres`: PostgreSQL storage backend using `sqlx`
//! - `inmemory`: `BTreeMap` storage, no persistence
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory backend is always compiled for tests.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p userapi
//! ```
//!
//! Build with PostgreSQL:
//! ```bash
//! cargo build -p userapi --no-default-features --features postgres
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "postgres"))]
compile_error!(
    "Features 'sqlite' and 'postgres' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "postgres", feature = "inmemory"))]
compile_error!("Cannot enable both 'postgres' and 'inmemory' storage features");

#[cfg(not(any(feature = "sqlite", feature = "postgres", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite', 'postgres' or 'inmemory'. \
    Example: cargo build -p userapi --no-default-features --features postgres"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
