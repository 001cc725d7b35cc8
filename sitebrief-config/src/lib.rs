//! Loader for workspace configuration with YAML + environment overlays.
//!
//! A `sitebrief.yaml` file describes the page fetcher and the configured
//! summarization providers; `SITEBRIEF_`-prefixed environment variables
//! override individual fields, and `${VAR}` placeholders inside string values
//! are expanded recursively (with a depth cap) so secrets can stay in the
//! environment.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct SitebriefConfig {
    pub version: Option<String>,
    #[serde(default)]
    pub fetch: FetchConfig,
    pub providers: Vec<ProviderSpec>,
}

/// Page fetch settings.
#[derive(Debug, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// Shared fields + the per-kind "details"
#[derive(Debug, Deserialize)]
pub struct ProviderSpec {
    pub id: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub details: ProviderDetails,
}

/// The tag is `kind`; the payload lives in `config`
#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
pub enum ProviderDetails {
    #[serde(rename = "chat")]
    Chat { config: ChatProviderConfig },

    #[serde(rename = "extractive")]
    Extractive { config: ExtractiveProviderConfig },
}

/// Hosted chat-completion backend.
#[derive(Debug, Deserialize)]
pub struct ChatProviderConfig {
    pub model: String,
    pub auth_token: String,
    /// API base URL; `chat/completions` is appended per request. A trailing
    /// slash is optional.
    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
}

/// Hosted sequence-to-sequence summarization backend.
#[derive(Debug, Deserialize)]
pub struct ExtractiveProviderConfig {
    pub auth_token: String,
    #[serde(default = "default_extractive_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_input_char_budget")]
    pub input_char_budget: usize,
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36"
        .into()
}
fn default_fetch_timeout_secs() -> u64 {
    10
}
fn default_backend_timeout_secs() -> u64 {
    60
}
fn default_chat_endpoint() -> String {
    "https://api.openai.com/v1/".into()
}
fn default_extractive_endpoint() -> String {
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn".into()
}
fn default_min_length() -> u32 {
    40
}
fn default_max_length() -> u32 {
    200
}
fn default_input_char_budget() -> usize {
    4000
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct SitebriefConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for SitebriefConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SitebriefConfigLoader {
    /// Start with sensible defaults: YAML file + `SITEBRIEF_` env overrides.
    ///
    /// ```
    /// use sitebrief_config::SitebriefConfigLoader;
    ///
    /// let config = SitebriefConfigLoader::new()
    ///     .with_yaml_str("version: '1'\nproviders: []")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.version.as_deref(), Some("1"));
    /// assert!(config.providers.is_empty());
    /// assert_eq!(config.fetch.timeout_secs, 10);
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("SITEBRIEF").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use sitebrief_config::{ProviderDetails, SitebriefConfigLoader};
    ///
    /// let cfg = SitebriefConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// version: "test"
    /// providers:
    ///   - id: "bart"
    ///     kind: "extractive"
    ///     config:
    ///       auth_token: "example"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.providers.len(), 1);
    /// match &cfg.providers[0].details {
    ///     ProviderDetails::Extractive { config } => {
    ///         assert_eq!(config.min_length, 40);
    ///         assert_eq!(config.max_length, 200);
    ///         assert_eq!(config.input_char_budget, 4000);
    ///     }
    ///     _ => panic!("expected extractive provider"),
    /// }
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly
    /// typed config, expanding `${VAR}` placeholders first.
    pub fn load(self) -> Result<SitebriefConfig, ConfigError> {
        let cfg = self.builder.build()?;

        // Convert to serde_json::Value first
        let mut v: Value = cfg.try_deserialize()?;
        // Recursively expand environment variables
        expand_env_in_value(&mut v);

        let typed: SitebriefConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
