//! userapi_client - CLI client for the userapi REST service.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::UserApiClient;
pub use error::{ClientError, Result};
