//! Shared startup for every subcommand: configuration, formatting and the
//! loaded coverage records.

use crate::cli::args::normalize_services;
use crate::config::{load_config, AckcovConfig};
use crate::core::{CoverageData, ServiceSubset};
use crate::errors::FailureSummary;
use crate::formatting::FormattingConfig;
use crate::io::{CoverageLoader, ResultsDirLoader};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Global flags that shape a session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub results_dir: Option<PathBuf>,
    pub plain: bool,
}

pub struct Session {
    pub config: AckcovConfig,
    pub records: CoverageData,
    pub formatting: FormattingConfig,
}

impl Session {
    /// Load configuration and records.
    ///
    /// # Errors
    ///
    /// Fails when the results directory is missing or unreadable, or when
    /// no record could be loaded from it.
    pub fn load(options: SessionOptions) -> Result<Self> {
        Self::load_with_config(options, load_config())
    }

    pub fn load_with_config(options: SessionOptions, config: AckcovConfig) -> Result<Self> {
        let dir = config.results_dir(options.results_dir);
        let loader = ResultsDirLoader::new(&dir);
        let loaded = loader
            .load()
            .with_context(|| format!("Failed to load coverage data from {}", dir.display()))?;

        if !loaded.is_complete_success() {
            eprintln!("{}", FailureSummary::from_failures(&loaded.failures).report());
        }

        if loaded.records.is_empty() {
            bail!(
                "No coverage data found in {}. Make sure the directory contains *-operations.json reports.",
                dir.display()
            );
        }
        info!(services = loaded.records.len(), "Coverage data loaded");

        let formatting = if options.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env().with_color_override(config.color_mode())
        };

        Ok(Self {
            config,
            records: loaded.records,
            formatting,
        })
    }

    /// Selection from `--services`, then the config file; `None` selects all.
    pub fn selection(&self, explicit: Option<Vec<String>>) -> Option<ServiceSubset> {
        let names = self.config.services(normalize_services(explicit))?;
        for name in names.iter().filter(|n| !self.records.contains_key(n.as_str())) {
            debug!(service = %name, "Ignoring unknown service in selection");
        }
        Some(names.into_iter().collect())
    }

    pub fn top(&self, explicit: Option<usize>) -> usize {
        self.config.top(explicit)
    }

    /// Error for a service key that was not loaded.
    pub fn unknown_service(&self, name: &str) -> anyhow::Error {
        let available: Vec<&str> = self.records.keys().map(String::as_str).collect();
        anyhow::anyhow!(
            "Unknown service '{}'. Available services: {}",
            name,
            available.join(", ")
        )
    }
}
