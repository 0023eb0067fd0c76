//! Structured logging and secret redaction.
//!
//! This module configures the `tracing` ecosystem for the application and
//! keeps Gemini API keys out of log output.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{ChefError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Prefix shared by all Google API keys.
const API_KEY_PREFIX: &str = "AIza";

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    installed.map_err(|e| ChefError::Config(format!("failed to install logger: {}", e)))
}

/// Replaces every Google API key in `input` with `[REDACTED_API_KEY]`.
///
/// Upstream error bodies occasionally echo the request URL or key, so any
/// text taken from a Gemini response goes through here before it is logged.
pub fn sanitize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(API_KEY_PREFIX) {
        result.push_str(&rest[..pos]);
        let token = &rest[pos..];
        let end = token
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(token.len());
        result.push_str("[REDACTED_API_KEY]");
        rest = &token[end..];
    }
    result.push_str(rest);

    result
}
