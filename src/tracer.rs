use crate::{Error, Result};
use tracing::Level;

/// Human readable diagnostics on stderr, leaving stdout to the demo output.
pub fn setup_simple_tracing(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::General(format!("failed to install tracing subscriber: {e}")))
}

pub fn setup_json_tracing(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .try_init()
        .map_err(|e| Error::General(format!("failed to install tracing subscriber: {e}")))
}
