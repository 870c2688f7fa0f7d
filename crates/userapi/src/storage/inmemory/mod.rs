//! In-memory storage backend.
//!
//! Stores users in a `BTreeMap` wrapped in `Arc<RwLock<_>>` and hands out
//! ids from an atomic counter. Useful for tests and for running the server
//! without a database.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
