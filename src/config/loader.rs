use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::{AckcovConfig, DEFAULT_TOP};

/// Name of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = ".ackcov.toml";

/// Read a config file's contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AckcovConfig, String> {
    let mut config = toml::from_str::<AckcovConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if config.top == Some(0) {
        tracing::warn!("Invalid top = 0 in {}. Using {}.", CONFIG_FILE_NAME, DEFAULT_TOP);
        config.top = Some(DEFAULT_TOP);
    }

    if let Some(color) = config.display.as_ref().and_then(|d| d.color.as_deref()) {
        if crate::formatting::ColorMode::parse(color).is_none() {
            tracing::warn!("Unknown color mode '{}' in {}. Using auto.", color, CONFIG_FILE_NAME);
            if let Some(display) = config.display.as_mut() {
                display.color = None;
            }
        }
    }

    Ok(config)
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AckcovConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find and load `.ackcov.toml` from `start` or one of its ancestors.
pub fn load_config_from(start: PathBuf) -> AckcovConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AckcovConfig::default()
        })
}

pub fn load_config() -> AckcovConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AckcovConfig::default()
        }
    }
}
