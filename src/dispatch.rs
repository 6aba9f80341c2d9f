//! Report selection and the end-to-end pipeline.
//!
//! A [`ReportConfig`] names a [`ReportKind`] and the input files. [`run`] validates the
//! configuration, reads the files, and generates the table; [`run_and_render`] also renders it.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use log::info;

use crate::error::{ReportError, ReportResult};
use crate::ingestion::{read_sources, SourceOptions};
use crate::processing::ValueRule;
use crate::reports::{render, AveragePriceReport, AverageRatingReport, OutputFormat, Report};
use crate::types::ReportTable;

/// Supported report types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReportKind {
    /// Mean price per brand.
    #[value(name = "average-price")]
    AveragePrice,
    /// Mean rating per brand.
    #[value(name = "average-rating")]
    AverageRating,
}

impl ReportKind {
    /// Every supported kind, in display order.
    pub const ALL: [ReportKind; 2] = [ReportKind::AveragePrice, ReportKind::AverageRating];

    /// Identifier used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::AveragePrice => AveragePriceReport::NAME,
            Self::AverageRating => AverageRatingReport::NAME,
        }
    }

    /// Names of all supported kinds.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }

    /// Build the report, replacing its default value rule when `rule` is set.
    pub fn build(self, rule: Option<ValueRule>) -> Box<dyn Report> {
        match (self, rule) {
            (Self::AveragePrice, None) => Box::new(AveragePriceReport::new()),
            (Self::AveragePrice, Some(r)) => Box::new(AveragePriceReport::with_rule(r)),
            (Self::AverageRating, None) => Box::new(AverageRatingReport::new()),
            (Self::AverageRating, Some(r)) => Box::new(AverageRatingReport::with_rule(r)),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ReportError::UnknownReport {
                name: s.to_string(),
                supported: Self::names(),
            })
    }
}

/// Everything needed to produce one report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Input files, read in order.
    pub files: Vec<PathBuf>,
    /// Which report to run.
    pub kind: ReportKind,
    /// Output rendering.
    pub output: OutputFormat,
    /// Overrides the report's default value rule.
    pub value_rule: Option<ValueRule>,
    /// File checking and reading options.
    pub source: SourceOptions,
}

impl ReportConfig {
    /// Config with default options for `kind` over `files`.
    pub fn new(kind: ReportKind, files: Vec<PathBuf>) -> Self {
        Self {
            files,
            kind,
            output: OutputFormat::default(),
            value_rule: None,
            source: SourceOptions::default(),
        }
    }

    /// Resolve a report name before anything else; unknown names fail without touching `files`.
    pub fn from_name(report: &str, files: Vec<PathBuf>) -> ReportResult<Self> {
        Ok(Self::new(report.parse()?, files))
    }

    /// Checks that need no I/O.
    pub fn validate(&self) -> ReportResult<()> {
        if self.files.is_empty() {
            return Err(ReportError::InvalidConfig {
                message: "at least one input file is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Read the configured files and generate the report table.
pub fn run(config: &ReportConfig) -> ReportResult<ReportTable> {
    config.validate()?;
    let report = config.kind.build(config.value_rule);
    let records = read_sources(config.files.as_slice(), &config.source)?;
    info!(
        "running '{}' over {} rows from {} files",
        report.name(),
        records.row_count(),
        config.files.len()
    );
    Ok(report.generate(&records))
}

/// [`run`], then render in the configured output format.
pub fn run_and_render(config: &ReportConfig) -> ReportResult<String> {
    let table = run(config)?;
    render(&table, config.output)
}

#[cfg(test)]
mod tests {
    use super::{ReportConfig, ReportKind};
    use crate::error::ReportError;

    #[test]
    fn kinds_round_trip_through_names() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.name().parse::<ReportKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(ReportKind::names(), vec!["average-price", "average-rating"]);
    }

    #[test]
    fn unknown_name_is_rejected_before_io() {
        let err = ReportConfig::from_name("median-price", vec!["does/not/exist.csv".into()])
            .unwrap_err();
        assert!(matches!(err, ReportError::UnknownReport { ref name, .. } if name == "median-price"));
    }

    #[test]
    fn built_reports_carry_their_names() {
        assert_eq!(ReportKind::AveragePrice.build(None).name(), "average-price");
        assert_eq!(ReportKind::AverageRating.build(None).headers()[2], "rating");
    }

    #[test]
    fn empty_file_list_is_a_configuration_error() {
        let err = super::run(&ReportConfig::new(ReportKind::AveragePrice, Vec::new())).unwrap_err();
        assert!(err.is_configuration_error());
    }
}
