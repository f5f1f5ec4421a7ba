//! Configuration for the folio terminal portfolio.
//!
//! Settings live in `config.toml` inside the platform config directory
//! (for example `~/.config/folio/config.toml` on Linux). Every field is
//! optional; a missing file means all defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use folio_core::{CellMetrics, Profile, Rgb};
use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Name of the log file inside the cache directory.
pub const LOG_FILE: &str = "folio.log";

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file was found; built-in defaults are in effect.
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field: FieldConfig,
    pub page: PageConfig,
    pub log: LogConfig,
}

/// Background particle field settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Milliseconds between animation frames.
    pub frame_interval_ms: u64,
    /// Cell width in pixels, used when the terminal doesn't report one.
    pub cell_width: u16,
    /// Cell height in pixels, used when the terminal doesn't report one.
    pub cell_height: u16,
    /// Page background as `[r, g, b]`.
    pub background: [u8; 3],
    /// Fixed seed for a reproducible particle layout.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            cell_width: 8,
            cell_height: 16,
            background: [15, 23, 42],
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics::new(self.cell_width, self.cell_height)
    }

    pub fn background(&self) -> Rgb {
        Rgb::from(self.background)
    }
}

/// Page content and behaviour settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Delay before the tagline starts typing.
    pub typing_delay_ms: u64,
    /// Time between typed characters.
    pub typing_interval_ms: u64,
    /// Scroll distance, in pixels, after which the back-to-top button shows.
    pub back_to_top_px: u32,
    /// Portfolio content; the built-in sample is used when absent.
    pub profile: Option<Profile>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 500,
            typing_interval_ms: 100,
            back_to_top_px: 300,
            profile: None,
        }
    }
}

impl PageConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    /// Configured profile or the built-in sample.
    pub fn profile(&self) -> Profile {
        self.profile.clone().unwrap_or_default()
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file; defaults to the cache directory.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Where log output goes, if anywhere can be determined.
    pub fn path(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.cache_dir().join(LOG_FILE)))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

impl Config {
    /// Default location of the configuration file.
    pub fn path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when no
    /// file exists.
    ///
    /// Runs before logging is set up, so the source is returned for the
    /// caller to report.
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_or_default(Self::path().as_deref())
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        match path {
            Some(path) if path.exists() => {
                let config = Self::load_from(path)?;
                Ok((config, ConfigSource::File(path.to_path_buf())))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reject settings the app cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "field.frame_interval_ms",
                reason: "must be greater than zero",
            });
        }
        if self.field.cell_width == 0 || self.field.cell_height == 0 {
            return Err(ConfigError::Invalid {
                field: "field.cell_width/cell_height",
                reason: "must be greater than zero",
            });
        }
        if self.page.typing_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "page.typing_interval_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
