//! `prompts` and `stages` handlers.

use super::PromptCommands;
use super::serve::open_store;
use loresmith_core::RefinementStage;
use loresmith_error::{LoresmithResult, PromptError, PromptErrorKind};
use loresmith_generation::seed_default_prompts;
use loresmith_interface::PromptRepository;
use loresmith_server::LoresmithConfig;
use uuid::Uuid;

/// Handle a prompt management command against the PostgreSQL store.
pub async fn handle_prompt_command(
    config: &LoresmithConfig,
    command: PromptCommands,
) -> LoresmithResult<()> {
    let store = open_store(config)?;

    match command {
        PromptCommands::List { prompt_type } => {
            let prompts = store.list_prompts(prompt_type.as_deref()).await?;
            if prompts.is_empty() {
                println!("No prompts found");
            }
            for prompt in prompts {
                let marker = if prompt.active { "*" } else { " " };
                println!(
                    "{marker} {:<14} v{:<3} {}  {}",
                    prompt.prompt_type, prompt.version, prompt.id, prompt.name
                );
            }
        }
        PromptCommands::Activate { id } => {
            let id = Uuid::parse_str(&id).map_err(|_| {
                PromptError::new(PromptErrorKind::Validation(format!("invalid id '{id}'")))
            })?;
            let prompt = store.activate_prompt(id).await?;
            println!(
                "Activated {} v{} ({})",
                prompt.prompt_type, prompt.version, prompt.name
            );
        }
        PromptCommands::Seed => {
            let inserted = seed_default_prompts(&store).await?;
            if inserted.is_empty() {
                println!("Every content type already has prompts");
            }
            for prompt in inserted {
                println!("Seeded {} v{} ({})", prompt.prompt_type, prompt.version, prompt.id);
            }
        }
    }
    Ok(())
}

/// Print the stage vocabulary in pipeline order.
pub fn print_stages() {
    for stage in RefinementStage::ordered() {
        match stage.next() {
            Some(next) => println!("{}. {stage} -> {next}", stage.position() + 1),
            None => println!("{}. {stage}", stage.position() + 1),
        }
    }
}
