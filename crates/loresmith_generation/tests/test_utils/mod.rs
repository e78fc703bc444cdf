//! Test utilities for generation tests.
//!
//! This module provides a mock driver and store helpers.

use loresmith_core::NewPrompt;
use loresmith_database::InMemoryStore;
use loresmith_interface::PromptRepository;

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

/// Insert an active prompt for `prompt_type` with the given template.
pub async fn seed_prompt(store: &InMemoryStore, prompt_type: &str, template: &str) {
    store
        .create_prompt(NewPrompt {
            prompt_type: prompt_type.to_string(),
            name: format!("{prompt_type} test prompt"),
            system_context: "You are a test chronicler.".to_string(),
            content_template: template.to_string(),
            active: true,
        })
        .await
        .expect("Failed to seed prompt");
}
