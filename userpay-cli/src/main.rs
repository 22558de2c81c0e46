//! Userpay CLI
//!
//! Command-line interface for the userpay demo API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use userpay_client::UserpayClient;

#[derive(Parser)]
#[command(name = "userpay")]
#[command(author, version, about = "Userpay demo API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the userpay API
    #[arg(long, env = "USERPAY_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the root greeting
    Hello,
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Look up the payment line for a user
    Payment {
        /// User ID
        id: String,
        /// Filter passed through as a query parameter
        #[arg(long)]
        filter: Option<String>,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum UserCommands {
    /// List users
    List,
    /// Get a single user
    Get {
        /// User ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = UserpayClient::new(&cli.api_url);

    match cli.command {
        Commands::Hello => {
            let body = client.hello().await?;
            println!("{}", body);
        }

        Commands::User { action } => match action {
            UserCommands::List => {
                let body = client.users_index().await?;
                println!("{}", body);
            }
            UserCommands::Get { id } => {
                let body = client.user(&id).await?;
                println!("{}", body);
            }
        },

        Commands::Payment { id, filter } => {
            let body = client.payment_summary(&id, filter).await?;
            println!("{}", body);
        }

        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
