mod common;

use std::time::Duration;

use sitebrief_common::Result;
use sitebrief_llm::chat::{ChatCompletionProvider, DEFAULT_CHAT_ENDPOINT};
use sitebrief_llm::traits::SummaryProvider;
use sitebrief_llm::DEFAULT_CHAT_MODEL;

fn make_provider_or_skip() -> ChatCompletionProvider {
    let key = std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
        tracing::debug!("Skipping: OPENAI API KEY not set");

        panic!("SKIP");
    });

    ChatCompletionProvider::new(
        key,
        DEFAULT_CHAT_MODEL.to_string(),
        DEFAULT_CHAT_ENDPOINT,
        Duration::from_secs(60),
    )
    .expect("should work")
}

#[tokio::test]
#[ignore]
async fn chat_summarize_smoketest() -> Result<()> {
    common::init_test_tracing();
    let provider = make_provider_or_skip();

    let summary = provider
        .summarize(
            "Example Domain",
            "This domain is for use in illustrative examples in documents.",
        )
        .await?;

    tracing::debug!("Chat summary is: {}", summary);

    assert!(
        !summary.trim().is_empty(),
        "summary text should not be empty"
    );
    Ok(())
}
