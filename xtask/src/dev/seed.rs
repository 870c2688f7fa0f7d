//! HTTP-based seeding of demo users.
//!
//! Pure generation of the demo payloads lives next to the I/O that posts
//! them to a running server.

use std::time::Duration;

use userapi_core::user::{NewUser, User};

use super::error::{DevError, Result};
use crate::prelude::*;

const DEMO_NAMES: &[&str] = &[
    "Ada Lovelace",
    "Alan Turing",
    "Grace Hopper",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Ken Thompson",
];

// ============================================================================
// Pure Functions (Functional Core)
// ============================================================================

/// Builds an email address from a display name.
///
/// `"Ada Lovelace"` becomes `"ada.lovelace@example.com"`.
pub fn email_for(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{local}@example.com")
}

/// Generates the demo users posted by `--seed`.
pub fn generate_seed_users() -> Vec<NewUser> {
    DEMO_NAMES
        .iter()
        .map(|name| NewUser::new(*name, email_for(name)))
        .collect()
}

// ============================================================================
// I/O Functions (Imperative Shell)
// ============================================================================

/// Polls the server's health endpoint until it responds or times out.
pub async fn wait_for_server(base_url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let health_url = format!("{base_url}/api/health");
    let poll_interval = Duration::from_millis(500);
    let start = std::time::Instant::now();

    loop {
        match client.get(&health_url).send().await {
            Ok(response) if response.status().is_success() => {
                return Ok(());
            }
            _ => {
                if start.elapsed() >= timeout {
                    return Err(DevError::Seed(format!(
                        "server at {base_url} not healthy after {}s",
                        timeout.as_secs()
                    )));
                }
                tokio::time::sleep(poll_interval).await;
            }
        }
    }
}

/// Creates a user via the HTTP API.
pub async fn create_user_via_http(
    client: &reqwest::Client,
    base_url: &str,
    user: &NewUser,
) -> Result<User> {
    let url = format!("{base_url}/api/users");

    let response = client
        .post(&url)
        .json(user)
        .send()
        .await
        .map_err(|e| DevError::Seed(format!("Failed to create user: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(DevError::Seed(format!(
            "Failed to create user: {status} - {body}"
        )));
    }

    response
        .json()
        .await
        .map_err(|e| DevError::Seed(format!("Failed to parse user response: {e}")))
}

/// Seeds the demo users, returning how many were created.
pub async fn seed_via_http(base_url: &str, silent: bool) -> Result<usize> {
    let client = reqwest::Client::new();
    let users = generate_seed_users();

    for new_user in &users {
        let user = create_user_via_http(&client, base_url, new_user).await?;
        if !silent {
            aprintln!("   {} {} <{}> (id {})", p_g("+"), user.name, user.email, user.id);
        }
    }

    Ok(users.len())
}
