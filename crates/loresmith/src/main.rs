//! Loresmith CLI binary.
//!
//! This binary provides command-line access to Loresmith:
//! - Run the HTTP API
//! - Apply database migrations
//! - Manage prompt templates

use clap::Parser;
use loresmith_server::{LoresmithConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_prompt_command, migrate, print_stages, run_server};

    // Load .env before reading configuration or secrets
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = LoresmithConfig::load()?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Serve { in_memory } => {
            run_server(&config, in_memory).await?;
        }

        Commands::Migrate => {
            migrate(&config)?;
        }

        Commands::Prompts(command) => {
            handle_prompt_command(&config, command).await?;
        }

        Commands::Stages => {
            print_stages();
        }
    }

    Ok(())
}
