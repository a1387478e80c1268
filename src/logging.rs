use crate::config::{Config, project_dirs};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send tracing output to `flix.log` in the cache directory; stdout belongs to the TUI.
pub fn init(config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = project_dirs()?.cache_dir().to_path_buf();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("flix.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;

    Ok(path)
}
