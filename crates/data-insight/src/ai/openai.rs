//! OpenAI chat-completions provider.
//!
//! [`OpenAiProvider`] implements [`SummaryProvider`] against the OpenAI
//! chat-completions endpoint (<https://platform.openai.com/docs/api-reference/chat>).
//! Any endpoint speaking the same wire format can be used through
//! [`OpenAiConfigBuilder::base_url`].

use super::SummaryProvider;
use anyhow::{Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

const DEFAULT_MODEL: &str = "gpt-4.1-mini";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature sent with every request.
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Enough for 5-8 bullet points.
const DEFAULT_MAX_TOKENS: u32 = 600;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<Message>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String> {
        self.choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .map(|msg| msg.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| anyhow!("No response content from OpenAI API"))
    }
}

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// The model to use (e.g., "gpt-4.1-mini").
    pub model: String,
    /// Temperature for response generation (0.0 - 2.0).
    pub temperature: f32,
    /// Maximum tokens in the response.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Endpoint URL (useful for proxies or compatible services).
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OpenAiConfig {
    pub fn builder() -> OpenAiConfigBuilder {
        OpenAiConfigBuilder::default()
    }
}

/// Builder for [`OpenAiConfig`].
#[derive(Default)]
pub struct OpenAiConfigBuilder {
    model: Option<String>,
    timeout_secs: Option<u64>,
    base_url: Option<String>,
}

impl OpenAiConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> OpenAiConfig {
        OpenAiConfig {
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Summary provider backed by the OpenAI chat-completions API.
///
/// # Example
///
/// ```rust,ignore
/// use data_insight::ai::{OpenAiConfig, OpenAiProvider};
///
/// let provider = OpenAiProvider::new("your-api-key")?;
///
/// let config = OpenAiConfig::builder()
///     .model("gpt-4.1")
///     .timeout_secs(60)
///     .build();
/// let provider = OpenAiProvider::with_config("your-api-key", config)?;
/// ```
pub struct OpenAiProvider {
    api_key: String,
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Create a provider with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, OpenAiConfig::default())
    }

    /// Create a provider with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(api_key: impl Into<String>, config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            api_key: api_key.into(),
            config,
            client,
        })
    }

    fn call_api(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("POST {} (model {})", self.config.base_url, self.config.model);

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "OpenAI API Error {}: {}",
                response.status(),
                response.text()?
            ));
        }

        let result: ChatResponse = response.json()?;
        result.into_text()
    }
}

impl SummaryProvider for OpenAiProvider {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.call_api(prompt)
    }

    fn name(&self) -> &str {
        "OpenAI"
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }
}

/// Build a provider from [`API_KEY_ENV`].
///
/// Returns `Ok(None)` when the variable is unset or blank, which callers
/// turn into the missing-credentials message.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn provider_from_env() -> crate::error::Result<Option<OpenAiProvider>> {
    let key = std::env::var(API_KEY_ENV).unwrap_or_default();
    provider_from_key(&key)
}

fn provider_from_key(key: &str) -> crate::error::Result<Option<OpenAiProvider>> {
    let key = key.trim();
    if key.is_empty() {
        debug!("{} not set", API_KEY_ENV);
        return Ok(None);
    }

    let provider = OpenAiProvider::new(key)
        .map_err(|e| crate::error::InsightError::AiClientError(e.to_string()))?;
    info!("Summary provider: OpenAI ({})", DEFAULT_MODEL);
    Ok(Some(provider))
}
