//! Command-line surface for the `tabular-report` binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::dispatch::{ReportConfig, ReportKind};
use crate::error::{ReportError, ReportResult};
use crate::ingestion::{LogObserver, SourceOptions};
use crate::processing::ValueRule;
use crate::reports::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "tabular-report",
    version,
    about = "Grouped averages over CSV files",
    long_about = "Read one or more CSV files (header row first) and print the mean of a numeric field per brand. Rows with missing, blank, or invalid values are skipped."
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "PATH",
        num_args = 1..,
        required = true,
        help = "CSV files to read, in order"
    )]
    pub files: Vec<PathBuf>,
    #[arg(long, value_enum, help = "Report to generate")]
    pub report: ReportKind,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, help = "Output format")]
    pub format: OutputFormat,
    #[arg(
        long = "min-value",
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Inclusive lower bound on the numeric field; replaces the report's default rule"
    )]
    pub min_value: Option<f64>,
    #[arg(
        long = "max-value",
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Inclusive upper bound on the numeric field; replaces the report's default rule"
    )]
    pub max_value: Option<f64>,
    #[arg(long, default_value_t = ',', help = "Field delimiter (single ASCII character)")]
    pub delimiter: char,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,
}

impl Cli {
    /// Log level requested by `-v` flags. `RUST_LOG` still takes precedence.
    ///
    /// Without flags only `error` records pass; fatal errors are printed once by the binary.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Turn parsed arguments into a [`ReportConfig`].
    pub fn into_config(self) -> ReportResult<ReportConfig> {
        if !self.delimiter.is_ascii() {
            return Err(ReportError::InvalidConfig {
                message: format!("delimiter must be a single ASCII character, got '{}'", self.delimiter),
            });
        }

        let value_rule = match (self.min_value, self.max_value) {
            (None, None) => None,
            (min, max) => Some(ValueRule::bounded(min, max)?),
        };

        Ok(ReportConfig {
            files: self.files,
            kind: self.report,
            output: self.format,
            value_rule,
            source: SourceOptions {
                delimiter: self.delimiter as u8,
                observer: Some(Arc::new(LogObserver)),
                ..SourceOptions::default()
            },
        })
    }
}
