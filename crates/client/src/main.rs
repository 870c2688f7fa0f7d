//! userapi-client CLI entry point.

use clap::Parser;
use userapi_client::cli::users::UsersAction;
use userapi_client::cli::{Cli, Commands, OutputFormat};
use userapi_client::client::UserApiClient;
use userapi_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = UserApiClient::new(&cli.base_url);

    match cli.command {
        Commands::Users(users_cmd) => match users_cmd.action {
            UsersAction::List => {
                let users = client.list_users().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&users, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_users(&users)),
                }
            }
            UsersAction::Create { name, email } => {
                let user = client.create_user(&name, &email).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&user, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_user(&user))
                    }
                }
            }
            UsersAction::Get { id } => {
                let user = client.get_user(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&user, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_user(&user)),
                }
            }
            UsersAction::Update { id, name, email } => {
                let user = client.update_user(id, &name, &email).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&user, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Updated:\n{}", pretty::format_user(&user))
                    }
                }
            }
            UsersAction::Delete { id } => {
                let message = client.delete_user(id).await?;
                if !cli.quiet {
                    println!("{message}");
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
            }
        }
    }

    Ok(())
}
