pub mod json;
pub mod terminal;

pub use json::output_json;
pub use terminal::{group_thousands, metrics_line, TerminalRenderer};

use crate::formatting::FormattingConfig;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Terminal,
    /// Pretty-printed JSON report
    Json,
}

/// Write a report in `format` to `output_file`, or stdout when `None`.
///
/// `render` produces the terminal text; JSON output serializes `report`.
pub fn output_report<T: Serialize>(
    report: &T,
    format: OutputFormat,
    output_file: Option<PathBuf>,
    formatting: FormattingConfig,
    render: impl FnOnce(&TerminalRenderer, &T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(report, output_file),
        OutputFormat::Terminal => {
            // Files never get ANSI escapes
            let formatting = if output_file.is_some() {
                FormattingConfig::plain()
            } else {
                formatting
            };
            let text = render(&TerminalRenderer::new(formatting), report);
            output_terminal(&text, output_file)
        }
    }
}

pub fn output_terminal(text: &str, output_file: Option<PathBuf>) -> Result<()> {
    match output_file {
        Some(path) => crate::io::write_file(&path, text),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
