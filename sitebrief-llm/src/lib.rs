//! Summarization providers for Sitebrief.
//!
//! This crate exposes a common [`traits::SummaryProvider`] interface and two
//! concrete backends: a hosted chat-completion API ([`chat`]) and a hosted
//! sequence-to-sequence summarization model ([`extractive`]). Both take their
//! credentials and endpoints as explicit constructor arguments — there is no
//! ambient configuration state.
//!
//! # Examples
//! ```no_run
//! use sitebrief_config::{ProviderDetails, ExtractiveProviderConfig};
//! use sitebrief_llm::provider_from_config;
//! use sitebrief_llm::traits::SummaryProvider;
//!
//! # fn main() -> sitebrief_common::Result<()> {
//! let details = ProviderDetails::Extractive {
//!     config: ExtractiveProviderConfig {
//!         auth_token: "hf_example".into(),
//!         endpoint: sitebrief_llm::extractive::DEFAULT_EXTRACTIVE_ENDPOINT.into(),
//!         min_length: 40,
//!         max_length: 200,
//!         input_char_budget: 4000,
//!         timeout_secs: 60,
//!     },
//! };
//! let provider = provider_from_config(&details)?;
//! assert!(!provider.name().is_empty());
//! # Ok(())
//! # }
//! ```
pub mod chat;
pub mod extractive;
pub mod traits;

use chat::ChatCompletionProvider;
use extractive::ExtractiveSummaryProvider;
use sitebrief_common::Result;
use sitebrief_config::ProviderDetails;
use std::sync::Arc;
use std::time::Duration;
use traits::SummaryProvider;

/// Default model for the chat-completion backend.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Build a concrete provider from its configuration entry.
pub fn provider_from_config(
    details: &ProviderDetails,
) -> Result<Arc<dyn SummaryProvider + Send + Sync + 'static>> {
    match details {
        ProviderDetails::Chat { config } => {
            let provider = ChatCompletionProvider::new(
                config.auth_token.clone(),
                config.model.clone(),
                &config.endpoint,
                Duration::from_secs(config.timeout_secs),
            )?;
            Ok(Arc::new(provider))
        }
        ProviderDetails::Extractive { config } => {
            let provider = ExtractiveSummaryProvider::new(
                config.auth_token.clone(),
                config.endpoint.clone(),
                config.min_length,
                config.max_length,
                config.input_char_budget,
                Duration::from_secs(config.timeout_secs),
            )?;
            Ok(Arc::new(provider))
        }
    }
}
