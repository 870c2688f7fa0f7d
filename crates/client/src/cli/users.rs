//! `users` subcommands.

use clap::{Parser, Subcommand};
use userapi_core::user::UserId;

#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// Print every stored user.
    List,
    /// Store a new user and print it with its assigned id.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Print one user.
    Get { id: UserId },
    /// Replace the name and email of a stored user.
    Update {
        id: UserId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Remove a user. Succeeds even when the id is unknown.
    Delete { id: UserId },
}
