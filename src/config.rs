//! Configuration loading and management for studia.
//!
//! Loads settings from `studia.toml` with environment variable overrides for sensitive data.

use crate::keywords::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_STOPWORDS, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing required API key for provider: {0}")]
    MissingApiKey(String),
}

/// Summarisation model configuration.
///
/// The decoding values mirror the defaults the tool was tuned with; backends
/// that cannot express beam search keep the length window and determinism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// LLM provider: currently "gemini"
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier (e.g., "gemini-2.0-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound of the target summary length window, in words
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Lower bound of the target summary length window, in words
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Beam width for backends that decode with beam search
    #[serde(default = "default_num_beams")]
    pub num_beams: usize,
    /// Length penalty for backends that decode with beam search
    #[serde(default = "default_length_penalty")]
    pub length_penalty: f64,
    /// Whether the backend may sample; false keeps decoding deterministic
    #[serde(default)]
    pub do_sample: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            max_length: default_max_length(),
            min_length: default_min_length(),
            num_beams: default_num_beams(),
            length_penalty: default_length_penalty(),
            do_sample: false,
        }
    }
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Post-processing pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Inputs shorter than this (after normalisation) get the placeholder summary
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,
    /// Sentences at or below this length are dropped from the cleaned summary
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
    /// Maximum number of bullet points
    #[serde(default = "default_max_bullets")]
    pub max_bullets: usize,
    /// Minimum keyword length
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
    /// Number of keywords to extract
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Replacement stopword list; the built-in English set when absent
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_input_chars: default_min_input_chars(),
            min_sentence_chars: default_min_sentence_chars(),
            max_bullets: default_max_bullets(),
            min_word_length: default_min_word_length(),
            top_n: default_top_n(),
            stopwords: None,
        }
    }
}

impl PipelineConfig {
    /// The stopword list in effect, borrowed as `&str` slices.
    pub fn stopword_list(&self) -> Vec<&str> {
        match &self.stopwords {
            Some(words) => words.iter().map(String::as_str).collect(),
            None => DEFAULT_STOPWORDS.to_vec(),
        }
    }
}

/// Text-to-speech configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechConfig {
    /// TTS program to invoke; platform default when absent
    #[serde(default)]
    pub program: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Config {
    /// Load configuration from the default location (studia.toml in cwd or home).
    ///
    /// Falls back to built-in defaults when no config file exists; the API key
    /// environment override is applied either way.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::find_config_file() {
            Some(path) => Self::read_from(&path)?,
            None => Config::default(),
        };
        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        Ok(Self::apply_env_overrides(config))
    }

    fn read_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.api.gemini_key = Some(key);
        }
        config
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("studia.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("studia").join("studia.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Get the API key for the configured provider
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.agent.provider.as_str() {
            "gemini" => self
                .api
                .gemini_key
                .as_deref()
                .ok_or_else(|| ConfigError::MissingApiKey("gemini".to_string())),
            other => Err(ConfigError::MissingApiKey(other.to_string())),
        }
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_max_length() -> usize {
    180
}

fn default_min_length() -> usize {
    80
}

fn default_num_beams() -> usize {
    4
}

fn default_length_penalty() -> f64 {
    1.2
}

fn default_min_input_chars() -> usize {
    50
}

fn default_min_sentence_chars() -> usize {
    15
}

fn default_max_bullets() -> usize {
    6
}

fn default_min_word_length() -> usize {
    DEFAULT_MIN_WORD_LENGTH
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.agent.provider, "gemini");
        assert_eq!(config.agent.max_length, 180);
        assert_eq!(config.agent.min_length, 80);
        assert!(!config.agent.do_sample);
        assert_eq!(config.pipeline.min_input_chars, 50);
        assert_eq!(config.pipeline.top_n, 6);
        assert!(config.pipeline.stopword_list().contains(&"the"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [agent]
            model = "gemini-2.5-pro"

            [pipeline]
            top_n = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.agent.model, "gemini-2.5-pro");
        assert_eq!(config.agent.num_beams, 4);
        assert_eq!(config.pipeline.top_n, 10);
        assert_eq!(config.pipeline.max_bullets, 6);
    }

    #[test]
    fn test_stopword_override() {
        let config: Config = toml::from_str(
            r#"
            [pipeline]
            stopwords = ["foo", "bar"]
            "#,
        )
        .unwrap();

        assert_eq!(config.pipeline.stopword_list(), vec!["foo", "bar"]);
    }

    #[test]
    fn test_missing_api_key() {
        let config = Config::default();
        assert!(matches!(
            config.api_key(),
            Err(ConfigError::MissingApiKey(_))
        ));
    }
}
