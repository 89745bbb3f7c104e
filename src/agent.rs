//! LLM agent module for abstractive summarisation.
//!
//! The pipeline depends on the `Summarizer` trait so the model can be swapped
//! for a test double; the production implementation uses rstructor's Gemini
//! client.

use crate::config::{AgentConfig, Config};
use async_trait::async_trait;
use rstructor::{GeminiClient, GeminiModel, LLMClient};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("model returned an empty summary")]
    EmptyResponse,
    #[error("configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

/// Abstractive summarisation boundary.
///
/// Implementations receive normalised study text and return one raw summary
/// string. Failures propagate to the caller as-is; no retry is performed.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, AgentError>;
}

/// Gemini-backed summariser.
pub struct GeminiSummarizer {
    api_key: String,
    options: AgentConfig,
}

impl GeminiSummarizer {
    /// Build a summariser from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, AgentError> {
        let api_key = config.api_key()?.to_string();
        Ok(Self {
            api_key,
            options: config.agent.clone(),
        })
    }

    /// Build the summarisation prompt embedding the target length window
    fn build_prompt(&self, text: &str) -> String {
        format!(
            r#"Summarise the following study material in roughly {} to {} words.
Write plain prose sentences separated by periods. Do not use markdown,
bullet characters, headings, or numbering. Do not repeat sentences.

---

{}"#,
            self.options.min_length, self.options.max_length, text
        )
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, AgentError> {
        let model = parse_gemini_model(&self.options.model);

        // Beam width and length penalty only apply to beam-search backends;
        // the Gemini API honours the length window and determinism.
        log::debug!(
            "summarising with {} (window {}-{} words, num_beams={}, length_penalty={}, do_sample={})",
            self.options.model,
            self.options.min_length,
            self.options.max_length,
            self.options.num_beams,
            self.options.length_penalty,
            self.options.do_sample,
        );

        let client = GeminiClient::new(&self.api_key)
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?
            .model(model);

        let prompt = self.build_prompt(text);
        let result = client
            .generate_with_metadata(&prompt)
            .await
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?;

        let summary = result.text.trim().to_string();
        if summary.is_empty() {
            return Err(AgentError::EmptyResponse);
        }
        Ok(summary)
    }
}

/// Parse a model string into a GeminiModel
fn parse_gemini_model(model: &str) -> GeminiModel {
    match model {
        "gemini-2.0-flash" => GeminiModel::Gemini20Flash,
        "gemini-2.5-flash" => GeminiModel::Gemini25Flash,
        "gemini-2.5-pro" => GeminiModel::Gemini25Pro,
        _ => GeminiModel::Gemini20Flash, // Default
    }
}
