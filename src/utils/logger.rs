//! Logger setup for the sweep binary

use std::io;

use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::LogLevel;
use crate::error::{Error, Result};

/// Directive used when `RUST_LOG` is not set
pub fn filter_directive(level: LogLevel) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Installs a compact stderr subscriber. `RUST_LOG` wins over `level` when
/// present; stdout stays reserved for status lines.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set tracing subscriber: {}", e)))?;

    debug!("Logger initialized with level: {}", level);
    Ok(())
}
