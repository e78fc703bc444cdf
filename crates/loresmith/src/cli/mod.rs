//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the loresmith binary.

mod commands;
mod prompts;
mod serve;

pub use commands::{Cli, Commands, PromptCommands};
pub use prompts::{handle_prompt_command, print_stages};
pub use serve::{migrate, run_server};
