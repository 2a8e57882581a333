//! Diagnostic logging on stderr.
//!
//! Filter precedence: `--log-level` flag, then the `TRUNCCOL_LOG` environment
//! variable, then `warn`. Command output goes to stdout and is never mixed
//! with log lines.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

pub const LOG_ENV: &str = "TRUNCCOL_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter from an explicit directive or the environment.
pub fn build_env_filter(explicit: Option<&str>) -> Result<EnvFilter, ParseError> {
    if let Some(directive) = explicit {
        return EnvFilter::try_new(directive);
    }
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(DEFAULT_DIRECTIVE),
    }
}

/// Installs the global stderr subscriber. A second call is a no-op.
pub fn init_logging(explicit: Option<&str>) -> Result<(), ParseError> {
    let filter = build_env_filter(explicit)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
    Ok(())
}
