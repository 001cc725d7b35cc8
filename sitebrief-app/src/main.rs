use anyhow::{Result, anyhow};
use clap::Parser;
use sitebrief_common::observability::{LogConfig, init_logging};
use sitebrief_config::{ProviderSpec, SitebriefConfig, SitebriefConfigLoader};
use sitebrief_llm::provider_from_config;
use sitebrief_web::extract::extract;
use sitebrief_web::fetch::{HttpPageFetcher, PageFetcher};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Fetch a web page, strip non-content markup, and print a short summary
/// produced by a configured summarization backend.
#[derive(Parser, Debug)]
#[command(name = "sitebrief", version, about)]
struct Cli {
    /// URL of the page to summarize
    url: Url,

    /// Provider id from the config file; defaults to the first enabled one
    #[arg(long)]
    provider: Option<String>,

    /// Path to the YAML configuration file
    #[arg(long, default_value = "sitebrief.yaml", env = "SITEBRIEF_CONFIG")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (env wins)
    let cfg: SitebriefConfig = SitebriefConfigLoader::new().with_file(&cli.config).load()?;

    init_logging(LogConfig::default())?;

    let spec = select_provider(&cfg, cli.provider.as_deref())?;
    let provider = provider_from_config(&spec.details)?;
    let fetcher = HttpPageFetcher::new(
        &cfg.fetch.user_agent,
        Duration::from_secs(cfg.fetch.timeout_secs),
    )?;

    let bytes = fetcher.fetch(&cli.url).await?;
    let page = extract(&bytes)?;
    tracing::info!(
        provider = %spec.id,
        title = %page.title,
        body_chars = page.body_text.len(),
        "page extracted"
    );

    let summary = provider.summarize(&page.title, &page.body_text).await?;
    println!("{summary}");
    Ok(())
}

/// Pick the requested provider by id, or the first enabled one.
fn select_provider<'a>(
    cfg: &'a SitebriefConfig,
    wanted: Option<&str>,
) -> Result<&'a ProviderSpec> {
    let mut enabled = cfg
        .providers
        .iter()
        .filter(|s| s.enabled.unwrap_or(true));

    match wanted {
        Some(id) => enabled
            .find(|s| s.id == id)
            .ok_or_else(|| anyhow!("no enabled provider with id '{id}' in configuration")),
        None => enabled
            .next()
            .ok_or_else(|| anyhow!("configuration has no enabled providers")),
    }
}
