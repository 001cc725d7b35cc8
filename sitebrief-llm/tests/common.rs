use std::sync::OnceLock;

use sitebrief_common::observability::{LogConfig, LogFormat, init_logging};

static TRACING: OnceLock<()> = OnceLock::new();

/// Route test logs through the shared subscriber, once per test binary.
///
/// Set `SITEBRIEF_LOG_FORMAT=json` to get JSON-encoded events instead of the
/// default text encoding.
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        let _ = init_logging(LogConfig {
            app_name: "sitebrief-tests",
            emit_stderr: true,
            format: log_format_from_env(),
            default_filter: "debug",
            ..LogConfig::default()
        });
    });
}

fn log_format_from_env() -> LogFormat {
    match std::env::var("SITEBRIEF_LOG_FORMAT") {
        Ok(raw) if raw.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}
