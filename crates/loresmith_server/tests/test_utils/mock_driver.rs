//! Mock LLM driver for router tests.

use async_trait::async_trait;
use loresmith_core::{GenerateRequest, GenerateResponse, Output};
use loresmith_error::{LoresmithError, LoresmithResult, ModelsError, ModelsErrorKind};
use loresmith_interface::LoresmithDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(ModelsErrorKind),
}

/// Mock driver counting its calls.
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(text.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock driver that always fails with the given error.
    #[allow(dead_code)]
    pub fn new_error(error: ModelsErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times generate() was called.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl LoresmithDriver for MockDriver {
    async fn generate(&self, _request: &GenerateRequest) -> LoresmithResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            MockBehavior::Error(kind) => Err(LoresmithError::from(ModelsError::new(kind.clone()))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
