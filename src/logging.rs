//! Subscriber setup for binaries and tests that want to see the logs
//!
//! # Environment Variables
//! - `RUST_LOG`: level filter (default: `info`)
//! - `LOG_FORMAT`: `pretty` (default) or `json`

use tracing_subscriber::EnvFilter;

/// Output format of [`init_logging`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT`; anything other than `json` means pretty
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`
///
/// Returns `false` if a global subscriber was already set.
pub fn init_logging() -> bool {
    init_logging_with(LogFormat::from_env())
}

/// Install a global `fmt` subscriber in the given format
pub fn init_logging_with(format: LogFormat) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let installed = match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}
