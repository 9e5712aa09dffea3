//! Tracing setup for the blogly CLI
//!
//! Usage:
//!   blogly --debug serve              # Debug logging to console
//!   blogly --echo-sql serve           # Log every executed SQL statement
//!   RUST_LOG=blogly_server=debug blogly serve
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Directive that surfaces sqlx's per-statement log lines.
const SQL_ECHO_DIRECTIVE: &str = "sqlx::query=debug";

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level if RUST_LOG is not set)
    pub debug: bool,
    /// Log executed SQL statements
    pub echo_sql: bool,
}

/// Build the env filter for the given configuration.
pub fn build_filter(config: &TracingConfig) -> Result<EnvFilter> {
    let filter = if config.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if config.echo_sql {
        Ok(filter.add_directive(SQL_ECHO_DIRECTIVE.parse()?))
    } else {
        Ok(filter)
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_sql_adds_query_directive() {
        let filter = build_filter(&TracingConfig {
            debug: false,
            echo_sql: true,
        })
        .unwrap();
        assert!(filter.to_string().contains(SQL_ECHO_DIRECTIVE));
    }
}
