//! Gemini `generateContent` client: request building and response parsing.

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Environment variable that overrides the configured key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Shown when the response carries no text
pub const FALLBACK_ANSWER: &str = "Sorry, I could not generate an answer.";

/// Errors from the chat bridge
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatError {
    #[error("Please enter a question")]
    EmptyQuery,
    #[error("No API key configured; set {API_KEY_ENV} or add a key in Settings")]
    MissingApiKey,
    #[error("API error: {status} ({reason})")]
    Api { status: u16, reason: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ChatError {
    /// Text for the chat panel; permission failures get a hint about key restrictions.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Api { status: 403, .. } => format!(
                "{self}. Permission denied: check that the API key is valid and that its \
                 application/referrer restrictions allow this client."
            ),
            other => other.to_string(),
        }
    }
}

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Build the JSON request body for a single-turn question.
pub fn build_request_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            { "parts": [ { "text": text } ] }
        ]
    })
}

/// First text part of the first candidate, or the fallback answer.
pub fn extract_answer(json: &serde_json::Value) -> String {
    json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|text| !text.is_empty())
        .unwrap_or(FALLBACK_ANSWER)
        .to_string()
}

/// Gemini API client.
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// One POST, no retry, no timeout.
    pub async fn generate(&self, text: &str) -> Result<String, ChatError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ChatError::MissingApiKey);
        }

        tracing::debug!(model = %self.config.model, "Gemini API request");

        let response = self
            .http
            .post(self.config.endpoint())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&build_request_body(text))
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        Ok(extract_answer(&json))
    }
}
