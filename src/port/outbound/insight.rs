//! Insight generation port.

use async_trait::async_trait;

use crate::error::InsightError;

/// Produces one ephemeral trading-commentary string per call.
///
/// Failures are the typed [`InsightError`], never the underlying transport
/// error; callers can pattern-match without seeing provider details.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(&self) -> Result<String, InsightError>;
}
