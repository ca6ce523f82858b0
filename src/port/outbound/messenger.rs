//! Outbound chat messaging port.

use async_trait::async_trait;

use crate::domain::UserId;
use crate::error::Result;

/// One outbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub text: String,
    /// Render as MarkdownV2 instead of plain text.
    pub markdown: bool,
}

impl Outgoing {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// Delivers messages to chat users.
///
/// Each send is an independent failure domain: broadcast delivery relies on
/// one rejection not poisoning the next.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, to: &UserId, message: &Outgoing) -> Result<()>;
}
