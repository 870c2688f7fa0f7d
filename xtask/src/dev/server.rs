//! Development server command.
//!
//! This module implements `cargo xtask dev`, which manages:
//! - Storage backend selection (inmemory, sqlite, postgres)
//! - Container orchestration for PostgreSQL
//! - HTTP-based seeding of demo users
//!
//! ## Execution Flow
//!
//! 1. **Option Resolution**: Parse CLI args, detect container runtime
//! 2. **Container Management**: Start required containers and wait for health
//! 3. **Server Execution**: Build and run `userapi` with the matching feature
//! 4. **Seeding and Cleanup**: Seed data via HTTP, remove containers on exit

use std::path::Path;
use std::time::Duration;

use tokio::process::{Child, Command};

use super::containers::{self, ContainerRuntime, ContainerSpec, Storage};
use super::error::{DevError, Result};
use super::seed;
use crate::prelude::*;

/// Run the server in development mode
#[derive(Debug, clap::Parser)]
#[command(long_about = "Run the userapi server in development mode.

Examples:
  cargo xtask dev                              # SQLite storage on port 8080
  cargo xtask dev --storage inmemory --seed    # In-memory storage with demo users
  cargo xtask dev --storage postgres           # PostgreSQL in a container
  cargo xtask dev --storage postgres --podman  # Use podman instead of docker")]
pub struct DevCommand {
    /// Port to run the server on
    #[arg(long, short = 'p', default_value = "8080", env = "PORT")]
    pub port: u16,

    /// Storage backend: inmemory, sqlite (default), postgres
    #[arg(long, default_value = "sqlite", env = "USERAPI_STORAGE")]
    pub storage: Storage,

    /// Use podman instead of docker
    #[arg(long, env = "USERAPI_PODMAN")]
    pub podman: bool,

    /// Seed the database with demo users via HTTP after startup
    #[arg(long)]
    pub seed: bool,

    /// Keep containers running after the server exits
    #[arg(long)]
    pub keep_containers: bool,

    /// Build in release mode
    #[arg(long)]
    pub release: bool,
}

pub async fn run(opts: DevCommand, global: crate::Global) -> Result<()> {
    // =========================================================================
    // Stage 1: Option Resolution
    // =========================================================================
    let features = containers::cargo_features(opts.storage);
    let required = containers::required_containers(opts.storage);

    if !global.is_silent() {
        aprintln!(
            "{} Starting development server on port {}",
            p_b("🌐"),
            opts.port
        );
        aprintln!("   Storage: {}", p_y(features));
    }

    let runtime = if !required.is_empty() {
        Some(containers::detect_runtime(opts.podman).await?)
    } else {
        None
    };

    let mut started_containers: Vec<&'static ContainerSpec> = Vec::new();

    // =========================================================================
    // Stage 2: Container Management
    // =========================================================================
    if let Some(runtime) = runtime {
        let verbose = global.is_verbose();

        for spec in required.iter().copied() {
            if !global.is_silent() {
                aprintln!("{} Starting {}...", p_b("🐳"), spec.name);
            }

            let healthy = match containers::start_container(runtime, spec, verbose).await {
                Ok(()) => {
                    started_containers.push(spec);
                    if !global.is_silent() {
                        aprintln!("{} Waiting for {} to be healthy...", p_b("⏳"), spec.name);
                    }
                    containers::wait_for_health(runtime, spec, Duration::from_secs(30)).await
                }
                Err(e) => Err(e),
            };

            if let Err(e) = healthy {
                if !opts.keep_containers {
                    cleanup_containers(runtime, &started_containers, &global).await;
                }
                return Err(e);
            }

            if !global.is_silent() {
                aprintln!("{} {} is ready", p_g("✓"), spec.name);
            }
        }
    }

    if opts.storage == Storage::Sqlite {
        if let Some(data_dir) = Path::new(containers::SQLITE_DEV_PATH).parent() {
            if !data_dir.exists() {
                std::fs::create_dir_all(data_dir)?;
                if !global.is_silent() {
                    aprintln!("{} Created SQLite data directory", p_g("✓"));
                }
            }
        }
    }

    // =========================================================================
    // Stage 3: Server Execution
    // =========================================================================
    let mut server = match start_server(&opts, features) {
        Ok(child) => child,
        Err(e) => {
            if !opts.keep_containers {
                if let Some(runtime) = runtime {
                    cleanup_containers(runtime, &started_containers, &global).await;
                }
            }
            return Err(e);
        }
    };

    // =========================================================================
    // Stage 4: Seeding and Cleanup
    // =========================================================================
    if opts.seed {
        let base_url = format!("http://localhost:{}", opts.port);
        if !global.is_silent() {
            aprintln!("{} Waiting for server to be ready...", p_b("⏳"));
        }

        let seeded = match seed::wait_for_server(&base_url, Duration::from_secs(120)).await {
            Ok(()) => seed::seed_via_http(&base_url, global.is_silent()).await,
            Err(e) => Err(e),
        };

        match seeded {
            Ok(count) => {
                if !global.is_silent() {
                    aprintln!("{} Seeded {} users", p_g("✓"), count);
                }
            }
            // The server keeps running when seeding fails.
            Err(e) => aprintln!("{} {}", p_r("✗"), e),
        }
    }

    let status = server.wait().await;

    if let Some(runtime) = runtime {
        if !opts.keep_containers {
            cleanup_containers(runtime, &started_containers, &global).await;
        } else if !global.is_silent() {
            aprintln!("{} Containers left running (--keep-containers)", p_y("⚠"));
        }
    }

    let status = status?;
    if !status.success() {
        return Err(DevError::Io(std::io::Error::other(format!(
            "Server process exited with {status}"
        ))));
    }

    Ok(())
}

/// Clean up started containers.
async fn cleanup_containers(
    runtime: ContainerRuntime,
    specs: &[&'static ContainerSpec],
    global: &crate::Global,
) {
    for spec in specs {
        if !global.is_silent() {
            aprintln!("{} Stopping {}...", p_b("🐳"), spec.name);
        }
        containers::stop_container(runtime, spec.name, global.is_verbose()).await;
    }
}

/// Builds the `cargo run` arguments for the selected storage feature.
fn cargo_run_args(features: &str, release: bool) -> Vec<&str> {
    let mut args = vec![
        "run",
        "-p",
        "userapi",
        "--no-default-features",
        "--features",
        features,
    ];
    if release {
        args.push("--release");
    }
    args
}

/// Start the server process with the storage feature and environment variables.
fn start_server(opts: &DevCommand, features: &str) -> Result<Child> {
    let mut cmd = Command::new("cargo");
    cmd.args(cargo_run_args(features, opts.release));

    for (key, value) in containers::environment_variables(opts.storage, opts.port) {
        cmd.env(key, value);
    }

    Ok(cmd.spawn()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_run_args_debug() {
        assert_eq!(
            cargo_run_args("postgres", false),
            ["run", "-p", "userapi", "--no-default-features", "--features", "postgres"]
        );
    }

    #[test]
    fn test_cargo_run_args_release() {
        let args = cargo_run_args("sqlite", true);

        assert_eq!(args.last(), Some(&"--release"));
        assert!(args.contains(&"sqlite"));
    }
}
