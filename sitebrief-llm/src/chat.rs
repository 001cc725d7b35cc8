//! Chat-completion summarization backend.
//!
//! Builds a fixed two-message exchange (system instruction + user message
//! carrying the page title and body text) and returns the first choice's
//! message content verbatim.

use crate::traits::SummaryProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sitebrief_common::{Result, SitebriefError};
use sitebrief_http::{HttpClient, HttpError};
use std::time::Duration;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/";

const SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of a website \
     and provides a short summary, ignoring text that might be navigation related. \
     Respond in markdown.";

pub struct ChatCompletionProvider {
    client: HttpClient,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatTurn,
}

#[derive(Debug, Deserialize)]
struct ChatTurn {
    #[serde(default)]
    content: String,
}

impl ChatCompletionProvider {
    /// Create a client for the given API key, model, and endpoint base.
    ///
    /// The endpoint is the API base (e.g. [`DEFAULT_CHAT_ENDPOINT`]);
    /// `chat/completions` is joined onto it per request, which is also what
    /// lets tests point the provider at a local mock server. A trailing slash
    /// is optional; one is appended when absent.
    pub fn new(api_key: String, model: String, endpoint: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last path segment of a base lacking a trailing
        // slash, so "https://api.openai.com/v1" would lose "/v1".
        let base = if endpoint.ends_with('/') {
            endpoint.to_string()
        } else {
            format!("{endpoint}/")
        };
        let client = HttpClient::new(&base)
            .map_err(|e| SitebriefError::Config(format!("invalid chat endpoint: {e}")))?
            .with_timeout(timeout);

        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    fn messages_for(&self, title: &str, body_text: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: user_prompt_for(title, body_text),
            },
        ]
    }
}

fn user_prompt_for(title: &str, body_text: &str) -> String {
    format!(
        "You are looking at a website titled {title}\n\n\
         The contents of this website are as follows; \
         please provide a short summary of this website in markdown. \
         If it includes news or announcements, then summarize these too.\n\n\
         {body_text}"
    )
}

#[async_trait]
impl SummaryProvider for ChatCompletionProvider {
    async fn summarize(&self, title: &str, body_text: &str) -> Result<String> {
        let req = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.messages_for(title, body_text),
        };

        let resp: ChatCompletionResponse = self
            .client
            .post_json("chat/completions", Some(&self.api_key), &req)
            .await
            .map_err(http_to_backend)?;

        let text = resp
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                SitebriefError::Backend("chat completion response contained no choices".into())
            })?;

        tracing::debug!(model = %self.model, chars = text.len(), "chat summary received");
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn http_to_backend(e: HttpError) -> SitebriefError {
    match e {
        HttpError::Api { status, body } => {
            SitebriefError::Backend(format!("chat completion API error {status}: {body}"))
        }
        other => SitebriefError::Backend(other.to_string()),
    }
}
