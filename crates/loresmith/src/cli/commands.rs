//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Loresmith - lore generation service for NFT character collections
#[derive(Parser, Debug)]
#[command(name = "loresmith")]
#[command(about = "Lore generation service for NFT character collections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Keep documents in memory instead of PostgreSQL (seeds default prompts)
        #[arg(long)]
        in_memory: bool,
    },

    /// Apply pending database migrations
    Migrate,

    /// Prompt template management
    #[command(subcommand)]
    Prompts(PromptCommands),

    /// Print the refinement stage vocabulary in order
    Stages,
}

/// Prompt management subcommands
#[derive(Subcommand, Debug)]
pub enum PromptCommands {
    /// List prompts, newest version first within each type
    List {
        /// Only prompts of this type
        #[arg(long = "type")]
        prompt_type: Option<String>,
    },

    /// Make a prompt the active one for its type
    Activate {
        /// Prompt id
        id: String,
    },

    /// Insert the bundled prompt for every type that has none
    Seed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults_to_postgres() {
        let cli = Cli::try_parse_from(["loresmith", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { in_memory: false }));
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["loresmith", "serve", "--in-memory", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { in_memory: true }));
        assert!(cli.verbose);
    }

    #[test]
    fn prompts_list_takes_type_filter() {
        let cli =
            Cli::try_parse_from(["loresmith", "prompts", "list", "--type", "tweet"]).unwrap();
        match cli.command {
            Commands::Prompts(PromptCommands::List { prompt_type }) => {
                assert_eq!(prompt_type.as_deref(), Some("tweet"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn prompts_activate_requires_id() {
        assert!(Cli::try_parse_from(["loresmith", "prompts", "activate"]).is_err());
    }
}
