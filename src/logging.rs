//! Diagnostic logging setup
//!
//! Everything logs through the `log` facade. The CLI writes to stderr; the
//! TUI owns the terminal, so its log lines go to a file instead.

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::{CredlineError, CredlineResult};

/// Where log lines are written
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Initialise `env_logger`, honouring `RUST_LOG` and falling back to `default_filter`
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(target: LogTarget<'_>, default_filter: &str) -> CredlineResult<()> {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let mut builder = env_logger::Builder::from_env(env);

    if let LogTarget::File(path) = target {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| CredlineError::Io(format!("Failed to open log file: {}", e)))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (tests, repeated runs)
    let _ = builder.try_init();
    Ok(())
}
