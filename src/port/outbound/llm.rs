//! LLM completion port.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model chat completion.
///
/// Implementations wrap a specific provider and handle authentication and
/// response parsing. Implementations must be `Send + Sync` to support
/// concurrent requests.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Send one completion request with a system/user prompt pair and
    /// return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response is
    /// invalid.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}
