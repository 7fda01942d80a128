use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use reqwest::{Client, StatusCode};
use log::{debug, error};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Gemini client for interacting with the Generative Language API
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (defaults to the public API when empty)
    endpoint: String,
    /// Model used for generation
    model: String,
    /// Sampling temperature forwarded in every request
    temperature: Option<f32>,
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// generateContent request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation turns
    contents: Vec<GeminiContent>,

    /// Sampling parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// One conversation turn
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Author of the turn (`user` or `model`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts of the turn
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A single content part; only text parts are used
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Sampling parameters
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// generateContent response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,

    /// Token usage information
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A generated candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<GeminiContent>,

    /// Why generation stopped (STOP, SAFETY, ...)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiRequest {
    /// Create a request with a single user turn
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: Some(prompt.into()) }],
            }],
            generation_config: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .max_output_tokens = Some(max_output_tokens);
        self
    }

    /// The text of the first part of the first turn
    pub fn prompt(&self) -> Option<&str> {
        self.contents.first()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

impl Gemini {
    /// Create a new Gemini client
    ///
    /// Without `timeout` the transport default applies.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Create a client from the provider section of the configuration
    pub fn from_config(config: &crate::app_config::ProviderConfig) -> Self {
        let mut gemini = Self::new(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.model.clone(),
            config.timeout_secs.map(Duration::from_secs),
        );
        gemini.temperature = config.temperature;
        gemini
    }

    /// Model used for generation
    pub fn model(&self) -> &str {
        &self.model
    }

    /// URL of the generateContent method for the configured model
    pub fn api_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/v1beta/models/{}:generateContent", base, self.model)
    }

    /// Complete a generateContent request
    pub async fn generate(&self, request: &GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let api_url = self.api_url();
        debug!("Sending generateContent request to model {}", self.model);

        let response = self.client.post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(format!("Failed to reach Gemini API: {}", e))
                } else {
                    ProviderError::RequestFailed(format!("Failed to send request to Gemini API: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(Self::map_status_error(status, &error_text));
        }

        response.json::<GeminiResponse>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Gemini API response: {}", e)))
    }

    /// Translate a non-2xx status into the provider error taxonomy
    fn map_status_error(status: StatusCode, body: &str) -> ProviderError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(message),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            },
        }
    }

    /// Extract text from a Gemini response
    ///
    /// Concatenates the text parts of the first candidate.
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response.candidates.first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content.parts.iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl Provider for Gemini {
    type Request = GeminiRequest;
    type Response = GeminiResponse;

    fn build_request(&self, prompt: &str) -> Self::Request {
        let request = GeminiRequest::new(prompt);
        match self.temperature {
            Some(temperature) => request.temperature(temperature),
            None => request,
        }
    }

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let response = self.generate(&request).await?;
        if Self::extract_text(&response).trim().is_empty() {
            let reason = response.candidates.first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "none".to_string());
            error!("Gemini returned no text (finish reason: {})", reason);
            return Err(ProviderError::EmptyResponse);
        }
        Ok(response)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = GeminiRequest::new("Hello").max_output_tokens(5);
        self.generate(&request).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        Self::extract_text_from_response(response)
    }
}
