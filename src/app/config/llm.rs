//! LLM provider configuration.

use serde::Deserialize;

/// LLM configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-specific settings.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// OpenAI-specific configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens in response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".into()
}

fn default_temperature() -> f64 {
    1.0
}

const fn default_max_tokens() -> usize {
    300
}
