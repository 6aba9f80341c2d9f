use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by ingestion, dispatch, and rendering.
///
/// Row-level validation failures are not errors: invalid rows are skipped by the reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Underlying I/O error (e.g. permission denied while reading an input file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// An input path does not exist or is not a regular file.
    #[error("input file not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// An input path does not carry the required extension.
    #[error("invalid input file {}: expected a '.{expected}' file", path.display())]
    InvalidExtension { path: PathBuf, expected: String },

    /// The requested report type is not one of the supported names.
    #[error("unknown report '{name}' (supported: {})", supported.join(", "))]
    UnknownReport {
        name: String,
        supported: Vec<&'static str>,
    },

    /// Options that cannot be combined or are out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON rendering failed.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

impl ReportError {
    /// True for failures caused by a missing, unreadable, or wrongly-typed input file.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Csv(_) | Self::ResourceNotFound { .. } | Self::InvalidExtension { .. }
        )
    }

    /// True for failures detected before any file is touched.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnknownReport { .. } | Self::InvalidConfig { .. })
    }
}
