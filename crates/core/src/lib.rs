//! userapi_core - functional core of the userapi service.
//!
//! Holds the `User` record, the storage contract every backend implements,
//! and the pure mapping from storage errors to HTTP status codes. Nothing in
//! this crate performs I/O.

pub mod health;
pub mod storage;
pub mod user;
