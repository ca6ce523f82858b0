//! Alpha insight generation.
//!
//! Wraps the LLM port with the bot's fixed persona and prompt. Each call
//! issues exactly one completion request; insight text is never cached.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::error::InsightError;
use crate::port::outbound::insight::InsightGenerator;
use crate::port::outbound::llm::Llm;

const SYSTEM_PROMPT: &str = "You are a crypto trading expert.";
const USER_PROMPT: &str = "Give me 1 high-signal crypto trading insight today, with reasoning.";

/// Fallback text when the completion comes back empty.
const EMPTY_FALLBACK: &str = "No insight generated.";

/// Production insight generator over an LLM client.
pub struct AlphaInsightGenerator {
    llm: Arc<dyn Llm>,
}

impl AlphaInsightGenerator {
    #[must_use]
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl InsightGenerator for AlphaInsightGenerator {
    async fn generate(&self) -> Result<String, InsightError> {
        match self.llm.complete(SYSTEM_PROMPT, USER_PROMPT).await {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(EMPTY_FALLBACK.to_string())
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(err) => {
                error!(provider = self.llm.name(), error = %err, "insight completion failed");
                Err(InsightError::Generation)
            }
        }
    }
}
