pub mod containers;
pub mod error;
pub mod seed;
pub mod server;

pub use server::{run, DevCommand};
