use crate::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use loresmith_core::{GenerateRequest, GenerateResponse, Output, Role};
use loresmith_error::{AnthropicErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
use loresmith_interface::LoresmithDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Messages endpoint of the public Anthropic API.
pub const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
/// Completion budget used when neither the request nor the client sets one.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-sonnet-4-20250514")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_url: DEFAULT_ANTHROPIC_API_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        }
    }

    /// Creates a client from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env(model: impl Into<String>) -> ModelsResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            ModelsError::new(ModelsErrorKind::MissingConfiguration(
                "ANTHROPIC_API_KEY environment variable not set".to_string(),
            ))
        })?;
        Ok(Self::new(api_key, model))
    }

    /// Point the client at a different messages endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Default completion budget for requests that don't set one.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Default temperature for requests that don't set one.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> ModelsResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelsError::new(AnthropicErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelsError::new(
                AnthropicErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelsError::new(
                AnthropicErrorKind::Parse(format!("Failed to parse response: {}", e)).into(),
            )
        })?;

        debug!(
            response_id = %anthropic_response.id(),
            input_tokens = anthropic_response.usage().input_tokens,
            output_tokens = anthropic_response.usage().output_tokens,
            "Received response from Anthropic"
        );
        Ok(anthropic_response)
    }

    /// Converts a Loresmith GenerateRequest to an Anthropic API request.
    #[instrument(skip(self, request))]
    pub fn convert_request(&self, request: &GenerateRequest) -> ModelsResult<AnthropicRequest> {
        debug!("Converting GenerateRequest to AnthropicRequest");

        if request.messages().is_empty() {
            return Err(ModelsError::new(
                AnthropicErrorKind::ConversionError(
                    "Request must contain at least one message".to_string(),
                )
                .into(),
            ));
        }

        let messages = request
            .messages()
            .iter()
            .map(|msg| {
                let role = match msg.role() {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };

                AnthropicMessage::builder()
                    .role(role)
                    .content(vec![AnthropicContentBlock::Text {
                        text: msg.content().clone(),
                    }])
                    .build()
                    .map_err(|e| {
                        ModelsError::new(AnthropicErrorKind::Builder(e.to_string()).into())
                    })
            })
            .collect::<ModelsResult<Vec<_>>>()?;

        let model = request.model().clone().unwrap_or_else(|| self.model.clone());
        let max_tokens = request.max_tokens().unwrap_or(self.max_tokens);
        let temperature = request.temperature().or(self.temperature);

        AnthropicRequest::builder()
            .model(model)
            .max_tokens(max_tokens)
            .messages(messages)
            .system(request.system().clone())
            .temperature(temperature)
            .build()
            .map_err(|e| ModelsError::new(AnthropicErrorKind::Builder(e.to_string()).into()))
    }

    /// Converts an Anthropic API response to a Loresmith GenerateResponse.
    pub fn convert_response(response: &AnthropicResponse) -> GenerateResponse {
        let outputs = response
            .content()
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(Output::Text(text.clone())),
                AnthropicContentBlock::Other => None,
            })
            .collect();

        GenerateResponse { outputs }
    }
}

#[async_trait::async_trait]
impl LoresmithDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> loresmith_error::LoresmithResult<GenerateResponse> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;
        Ok(Self::convert_response(&anthropic_response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loresmith_core::Message;

    fn client() -> AnthropicClient {
        AnthropicClient::new("test-key", "claude-test").with_max_tokens(1024)
    }

    #[test]
    fn system_context_travels_as_top_level_field() {
        let request = GenerateRequest::builder()
            .system(Some("You are a chronicler.".to_string()))
            .messages(vec![Message::user("Write it")])
            .build()
            .unwrap();

        let converted = client().convert_request(&request).unwrap();
        assert_eq!(converted.system().as_deref(), Some("You are a chronicler."));
        assert_eq!(converted.messages().len(), 1);
        assert_eq!(converted.messages()[0].role(), "user");
        assert_eq!(*converted.max_tokens(), 1024);
        assert_eq!(converted.model(), "claude-test");
    }

    #[test]
    fn request_overrides_client_defaults() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user("Write it")])
            .max_tokens(Some(64))
            .temperature(Some(0.2))
            .model(Some("claude-other".to_string()))
            .build()
            .unwrap();

        let converted = client().convert_request(&request).unwrap();
        assert_eq!(*converted.max_tokens(), 64);
        assert_eq!(*converted.temperature(), Some(0.2));
        assert_eq!(converted.model(), "claude-other");
    }

    #[test]
    fn empty_conversation_is_rejected() {
        let request = GenerateRequest::default();
        assert!(client().convert_request(&request).is_err());
    }

    #[test]
    fn serialized_request_omits_unset_optionals() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user("hi")])
            .build()
            .unwrap();
        let json = serde_json::to_value(client().convert_request(&request).unwrap()).unwrap();
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
    }

    #[test]
    fn response_keeps_text_blocks_only() {
        let response: AnthropicResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_1",
            "model": "claude-test",
            "content": [
                {"type": "thinking", "thinking": "hmm"},
                {"type": "text", "text": "A ranger "},
                {"type": "text", "text": "of the north."}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }))
        .unwrap();

        let converted = AnthropicClient::convert_response(&response);
        assert_eq!(converted.outputs.len(), 2);
        assert_eq!(converted.text(), "A ranger of the north.");
    }
}
