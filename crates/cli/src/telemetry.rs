//! Logging wiring.
//!
//! Every crate emits `tracing` spans and events; this module installs the one
//! subscriber that renders them. `RUST_LOG` takes precedence; otherwise the
//! level is `info`, or `debug` when the runner has debug logging enabled.
//! Set `PR_SIZE_LOG_FORMAT=json` for newline-delimited JSON output.

use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;

pub const LOG_FORMAT_VAR: &str = "PR_SIZE_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

pub fn init(format: LogFormat, debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. in tests) is harmless.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
}
