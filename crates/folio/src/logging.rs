//! File-backed logging.
//!
//! The terminal belongs to the UI, so log records go to a file instead of
//! stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};
use folio_config::LogConfig;

/// Install the global logger. `RUST_LOG` overrides the configured level.
///
/// Returns the log file path, or `None` when no location could be found.
pub fn init(config: &LogConfig) -> io::Result<Option<PathBuf>> {
    let Some(path) = config.path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)?;
    Ok(Some(path))
}
