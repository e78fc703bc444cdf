//! Mock LLM driver for testing.

use async_trait::async_trait;
use loresmith_core::{GenerateRequest, GenerateResponse, Output};
use loresmith_error::{
    AnthropicErrorKind, LoresmithError, LoresmithResult, ModelsError, ModelsErrorKind,
};
use loresmith_interface::LoresmithDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(ModelsErrorKind),
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    #[allow(dead_code)]
    Error(ModelsErrorKind),
}

/// Mock driver that records every request it receives.
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    #[allow(dead_code)]
    pub fn new_error(error: ModelsErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock driver with a sequence of responses.
    #[allow(dead_code)]
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request, if any.
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn next_response(&self, request: &GenerateRequest) -> LoresmithResult<GenerateResponse> {
        let mut requests = self.requests.lock().unwrap();
        let current = requests.len();
        requests.push(request.clone());

        let text = |t: &String| GenerateResponse {
            outputs: vec![Output::Text(t.clone())],
        };
        match &self.behavior {
            MockBehavior::Success(t) => Ok(text(t)),
            MockBehavior::Error(kind) => Err(LoresmithError::from(ModelsError::new(kind.clone()))),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(MockResponse::Success(t)) => Ok(text(t)),
                Some(MockResponse::Error(kind)) => {
                    Err(LoresmithError::from(ModelsError::new(kind.clone())))
                }
                None => Err(LoresmithError::from(ModelsError::new(
                    AnthropicErrorKind::Http(format!(
                        "Mock sequence exhausted (call {} beyond {} responses)",
                        current + 1,
                        responses.len()
                    ))
                    .into(),
                ))),
            },
        }
    }
}

#[async_trait]
impl LoresmithDriver for MockDriver {
    async fn generate(&self, request: &GenerateRequest) -> LoresmithResult<GenerateResponse> {
        self.next_response(request)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
