//! Extractive/abstractive summarization backend.
//!
//! Sends `"Title: {title}\n\n{body_text}"` (truncated to a character budget)
//! with numeric length controls to a hosted summarization endpoint and
//! projects `summary_text` out of the first element of the returned array.

use crate::traits::SummaryProvider;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;
use sitebrief_common::{Result, SitebriefError};
use sitebrief_http::{Auth, HttpClient, HttpError, RequestOpts};
use std::time::Duration;

pub const DEFAULT_EXTRACTIVE_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Returned when the backend answers 200 but the response shape carries no
/// usable summary. This is a degraded result, not an error.
pub const FALLBACK_SUMMARY: &str = "Could not generate summary.";

pub struct ExtractiveSummaryProvider {
    client: HttpClient,
    api_key: String,
    endpoint: String,
    min_length: u32,
    max_length: u32,
    input_char_budget: usize,
}

#[derive(Serialize)]
struct SummarizationRequest {
    inputs: String,
    parameters: SummarizationParameters,
}

#[derive(Serialize)]
struct SummarizationParameters {
    min_length: u32,
    max_length: u32,
}

impl ExtractiveSummaryProvider {
    pub fn new(
        api_key: String,
        endpoint: String,
        min_length: u32,
        max_length: u32,
        input_char_budget: usize,
        timeout: Duration,
    ) -> Result<Self> {
        // The endpoint is a full model URL, not an API base; requests go to
        // it as-is.
        let client = HttpClient::new(&endpoint)
            .map_err(|e| SitebriefError::Config(format!("invalid summarization endpoint: {e}")))?
            .with_timeout(timeout);

        Ok(Self {
            client,
            api_key,
            endpoint,
            min_length,
            max_length,
            input_char_budget,
        })
    }

    fn compose_input(&self, title: &str, body_text: &str) -> String {
        truncate_chars(
            format!("Title: {title}\n\n{body_text}"),
            self.input_char_budget,
        )
    }
}

/// Cut to at most `budget` characters, respecting char boundaries.
fn truncate_chars(mut s: String, budget: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(budget) {
        s.truncate(idx);
    }
    s
}

#[async_trait]
impl SummaryProvider for ExtractiveSummaryProvider {
    async fn summarize(&self, title: &str, body_text: &str) -> Result<String> {
        let req = SummarizationRequest {
            inputs: self.compose_input(title, body_text),
            parameters: SummarizationParameters {
                min_length: self.min_length,
                max_length: self.max_length,
            },
        };

        let opts = RequestOpts {
            auth: Some(Auth::Bearer(&self.api_key)),
            allow_absolute: true,
            ..Default::default()
        };
        let resp: JsonValue = self
            .client
            .post_json_opts(&self.endpoint, &req, opts)
            .await
            .map_err(http_to_backend)?;

        // Expected shape: [{"summary_text": "..."}]. Anything else (model
        // still loading, error object, missing field) degrades to the
        // fallback string rather than failing the pipeline.
        match resp
            .get(0)
            .and_then(|first| first.get("summary_text"))
            .and_then(|s| s.as_str())
        {
            Some(summary) => Ok(summary.to_string()),
            None => {
                tracing::warn!(
                    response = %snippet_of(&resp),
                    "summarization response had no summary_text; using fallback"
                );
                Ok(FALLBACK_SUMMARY.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        &self.endpoint
    }
}

fn http_to_backend(e: HttpError) -> SitebriefError {
    match e {
        HttpError::Api { status, body } => {
            SitebriefError::Backend(format!("summarization API error {status}: {body}"))
        }
        other => SitebriefError::Backend(other.to_string()),
    }
}

fn snippet_of(v: &JsonValue) -> String {
    let mut s = v.to_string();
    if let Some((idx, _)) = s.char_indices().nth(200) {
        s.truncate(idx);
        s.push_str("...");
    }
    s
}
