//! TOML configuration.
//!
//! ```toml
//! [device]
//! path = ""                 # empty or absent: auto-discover
//! search_dir = "/dev/input"
//!
//! [output]
//! format = "json-lines"     # or "log"
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.

use crate::backends::linux::DEFAULT_INPUT_DIR;
use crate::device::DeviceSelector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub device: DeviceConfig,
    pub output: OutputConfig,
}

/// Which node to read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Explicit node path; empty means auto-discover.
    pub path: Option<String>,
    /// Directory scanned by auto-discovery.
    pub search_dir: PathBuf,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            path: None,
            search_dir: PathBuf::from(DEFAULT_INPUT_DIR),
        }
    }
}

impl DeviceConfig {
    pub fn selector(&self) -> DeviceSelector {
        DeviceSelector::from(self.path.clone())
    }
}

/// How forwarded key messages leave the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One JSON object per line on stdout.
    #[default]
    JsonLines,
    /// `tracing` events on stderr only.
    Log,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Layer command-line values over the file: any `Some` wins over the file,
    /// so the device hint resolves as CLI path, then `device.path`, then auto-discover.
    pub fn apply_overrides(
        &mut self,
        device: Option<String>,
        search_dir: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) {
        if let Some(device) = device {
            self.device.path = Some(device);
        }
        if let Some(dir) = search_dir {
            self.device.search_dir = dir;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
