use std::{fs::OpenOptions, io, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to stderr.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}

/// Logs to a file, leaving the terminal to the UI. Without a path nothing is
/// installed.
pub fn init_file(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let path = shellexpand::tilde(path);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())
        .with_context(|| format!("Failed to open log file at path: {}", path))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}
