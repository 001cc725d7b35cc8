use async_trait::async_trait;
use sitebrief_common::Result;

/// A summarization backend: extracted page text in, summary text out.
///
/// Implementations are opaque network collaborators; the caller only relies
/// on the string-in/string-out contract and treats every failure as final
/// (no retries anywhere in the pipeline).
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Produce a short summary of the page with the given title and body text.
    async fn summarize(&self, title: &str, body_text: &str) -> Result<String>;

    /// Identifier used in logs and CLI output (provider/model).
    fn name(&self) -> &str;
}
