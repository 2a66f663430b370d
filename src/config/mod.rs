//! Project configuration from `.ackcov.toml`.
//!
//! Every setting is optional. Command-line flags (and their environment
//! variables) take precedence over the file, which takes precedence over
//! built-in defaults.

pub mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use crate::formatting::ColorMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Results directory used when nothing else is configured
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Length of the "top services" lists
pub const DEFAULT_TOP: usize = 10;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckcovConfig {
    /// Directory holding the per-service JSON reports
    #[serde(default)]
    pub results_dir: Option<PathBuf>,

    /// Number of services in the "top" lists
    #[serde(default)]
    pub top: Option<usize>,

    /// Services selected when a session starts; all services when absent
    #[serde(default)]
    pub services: Option<Vec<String>>,

    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// auto, always or never
    #[serde(default)]
    pub color: Option<String>,
}

impl AckcovConfig {
    /// Results directory: explicit value, then config file, then default.
    pub fn results_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.results_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR))
    }

    pub fn top(&self, explicit: Option<usize>) -> usize {
        explicit.or(self.top).unwrap_or(DEFAULT_TOP)
    }

    /// Initial selection: explicit list, then config file, then `None` (all).
    pub fn services(&self, explicit: Option<Vec<String>>) -> Option<Vec<String>> {
        explicit.or_else(|| self.services.clone())
    }

    pub fn color_mode(&self) -> Option<ColorMode> {
        self.display
            .as_ref()
            .and_then(|d| d.color.as_deref())
            .and_then(ColorMode::parse)
    }
}
