//! Multi-file entrypoint.
//!
//! [`read_sources`] validates every input path up front and only then reads the files in the order
//! given, concatenating their rows into one [`RecordSet`]. Any failure aborts the whole call.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ReportError, ReportResult};
use crate::types::RecordSet;

use super::csv::read_csv_from_path;
use super::observability::{SourceContext, SourceObserver, SourceSeverity, SourceStats};

/// Extension required on input paths unless overridden.
pub const DEFAULT_EXTENSION: &str = "csv";

/// Options controlling how input files are checked and read.
///
/// Use [`Default`] for comma-separated `.csv` files.
#[derive(Clone)]
pub struct SourceOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Required file extension, without the dot. Compared case-sensitively.
    pub extension: String,
    /// Trim surrounding whitespace from header names.
    pub trim_headers: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SourceObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: SourceSeverity,
}

impl fmt::Debug for SourceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("extension", &self.extension)
            .field("trim_headers", &self.trim_headers)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            extension: DEFAULT_EXTENSION.to_string(),
            trim_headers: true,
            observer: None,
            alert_at_or_above: SourceSeverity::Critical,
        }
    }
}

/// Read all `paths` into one [`RecordSet`], first file first.
///
/// Every path is checked with [`check_source`] before any file is opened, so a bad path anywhere
/// in the list fails the call without reading rows from the others.
///
/// ```no_run
/// use tabular_report::ingestion::{read_sources, SourceOptions};
///
/// # fn main() -> Result<(), tabular_report::ReportError> {
/// let rows = read_sources(&["q1.csv", "q2.csv"], &SourceOptions::default())?;
/// println!("rows={}", rows.row_count());
/// # Ok(())
/// # }
/// ```
pub fn read_sources<P: AsRef<Path>>(paths: &[P], options: &SourceOptions) -> ReportResult<RecordSet> {
    for path in paths {
        let path = path.as_ref();
        if let Err(e) = check_source(path, &options.extension) {
            report_failure(options, path, &e);
            return Err(e);
        }
    }

    let mut out = RecordSet::default();
    for path in paths {
        let path = path.as_ref();
        match read_one(path, options) {
            Ok(rs) => {
                if let Some(obs) = options.observer.as_ref() {
                    obs.on_success(
                        &SourceContext { path: path.to_path_buf() },
                        SourceStats { rows: rs.row_count() },
                    );
                }
                out.extend(rs);
            }
            Err(e) => {
                report_failure(options, path, &e);
                return Err(e);
            }
        }
    }

    Ok(out)
}

/// Check that `path` is an existing regular file ending in `.{extension}`.
pub fn check_source(path: &Path, extension: &str) -> ReportResult<()> {
    if !path.is_file() {
        return Err(ReportError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }

    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext == extension => Ok(()),
        _ => Err(ReportError::InvalidExtension {
            path: path.to_path_buf(),
            expected: extension.to_string(),
        }),
    }
}

fn read_one(path: &Path, options: &SourceOptions) -> ReportResult<RecordSet> {
    read_csv_from_path(path, options.delimiter, options.trim_headers)
}

fn report_failure(options: &SourceOptions, path: &Path, e: &ReportError) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    let ctx = SourceContext {
        path: path.to_path_buf(),
    };
    let sev = SourceSeverity::for_error(e);
    obs.on_failure(&ctx, sev, e);
    if sev >= options.alert_at_or_above {
        obs.on_alert(&ctx, sev, e);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::check_source;
    use crate::error::ReportError;

    #[test]
    fn check_source_rejects_missing_file() {
        let err = check_source(Path::new("definitely/not/here.csv"), "csv").unwrap_err();
        assert!(matches!(err, ReportError::ResourceNotFound { .. }));
    }

    #[test]
    fn check_source_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("data.txt");
        std::fs::write(&txt, "brand,price\nApple,1000\n").unwrap();
        let err = check_source(&txt, "csv").unwrap_err();
        assert!(matches!(err, ReportError::InvalidExtension { .. }));

        let upper = dir.path().join("data.CSV");
        std::fs::write(&upper, "brand,price\n").unwrap();
        assert!(check_source(&upper, "csv").is_err());
    }

    #[test]
    fn check_source_rejects_directories() {
        let dir = tempfile::Builder::new().suffix(".csv").tempdir().unwrap();
        let err = check_source(dir.path(), "csv").unwrap_err();
        assert!(matches!(err, ReportError::ResourceNotFound { .. }));
    }
}
