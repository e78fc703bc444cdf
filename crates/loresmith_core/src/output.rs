//! Output types from LLM responses.

use serde::{Deserialize, Serialize};

/// Output blocks returned by a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}
