//! See <https://github.com/matklad/cargo-xtask/>
//!
//! This binary defines various auxiliary build commands, which are not
//! expressible with just `cargo`.
//!
//! The binary is integrated into the `cargo` command line by using an
//! alias in `.cargo/config`.

use clap::Parser;

mod dev;
mod prelude;

/// Development tasks for the userapi repository
#[derive(Debug, Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for userapi", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Commands,
}

/// Flags accepted by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Print nothing but errors
    #[clap(long, global = true)]
    pub silent: bool,

    /// Echo the container commands being run
    #[clap(long, global = true)]
    pub verbose: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the server in development mode
    Dev(dev::DevCommand),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dev(dev_cmd) => {
            dev::run(dev_cmd, cli.global).await?;
        }
    }

    Ok(())
}
