//! Loading coverage reports from a results directory.
//!
//! The generator writes one JSON document per service, usually named
//! `<service>-operations.json`. Every `*.json` file directly inside the
//! directory is loaded independently: a file that cannot be read, parsed or
//! validated is logged, recorded as a [`LoadFailure`] and skipped.

use crate::core::{CoverageData, CoverageRecord};
use crate::errors::{LoadError, LoadFailure, RecordError};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span, warn};
use walkdir::WalkDir;

/// Suffix the generator appends to service names in file names.
const FILE_SUFFIX: &str = "-operations";

/// Records loaded from storage plus the files that were excluded.
#[derive(Debug, Default)]
pub struct LoadedCoverage {
    pub records: CoverageData,
    pub failures: Vec<LoadFailure>,
}

impl LoadedCoverage {
    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Source of coverage records for a dashboard session.
pub trait CoverageLoader {
    /// Load every record the source holds.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` only when the source as a whole is unusable;
    /// per-record problems are reported in [`LoadedCoverage::failures`].
    fn load(&self) -> Result<LoadedCoverage, LoadError>;
}

/// Loads `*.json` reports from a directory, in file name order.
#[derive(Debug, Clone)]
pub struct ResultsDirLoader {
    dir: PathBuf,
}

impl ResultsDirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn report_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| LoadError::Scan {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}

impl CoverageLoader for ResultsDirLoader {
    fn load(&self) -> Result<LoadedCoverage, LoadError> {
        let _span = info_span!("load_results", dir = %self.dir.display()).entered();

        if !self.dir.is_dir() {
            return Err(LoadError::MissingDirectory {
                path: self.dir.clone(),
            });
        }

        let mut loaded = LoadedCoverage::default();
        for path in self.report_files()? {
            match load_report_file(&path) {
                Ok((key, record)) => {
                    debug!(service = %key, file = %path.display(), "loaded coverage report");
                    if loaded.records.insert(key.clone(), record).is_some() {
                        warn!(service = %key, file = %path.display(), "duplicate service report replaces earlier one");
                    }
                }
                Err(failure) => {
                    warn!(file = %failure.path.display(), error = %failure.error, "skipping coverage report");
                    loaded.failures.push(failure);
                }
            }
        }

        debug!(
            records = loaded.records.len(),
            failures = loaded.failures.len(),
            "finished loading results"
        );
        Ok(loaded)
    }
}

fn load_report_file(path: &Path) -> Result<(String, CoverageRecord), LoadFailure> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .map_err(|e| LoadFailure::file_read(path.to_path_buf(), e))?;

    parse_record(&contents, &service_key_from_path(path)).map_err(|e| {
        if e.is_invariant_violation() {
            LoadFailure::validation(path.to_path_buf(), e.into())
        } else {
            LoadFailure::file_parse(path.to_path_buf(), e.into())
        }
    })
}

/// Parse and validate one report document.
///
/// The record is keyed by its `service_name` field when present, otherwise
/// by `fallback_key`. The returned record's `service_name` is set to the key.
pub fn parse_record(
    contents: &str,
    fallback_key: &str,
) -> Result<(String, CoverageRecord), RecordError> {
    let mut record: CoverageRecord = serde_json::from_str(contents)?;
    let key = record
        .service_name
        .clone()
        .unwrap_or_else(|| fallback_key.to_string());

    record.validate(&key)?;
    record.service_name = Some(key.clone());
    Ok((key, record))
}

/// File stem with every `-operations` occurrence removed.
pub fn service_key_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.replace(FILE_SUFFIX, "")
}
