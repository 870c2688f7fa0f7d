mod operations;
mod types;

pub use operations::apply_changes;
pub use types::{NewUser, User, UserId};
