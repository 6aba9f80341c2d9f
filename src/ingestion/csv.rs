//! CSV reading into untyped rows.

use std::path::Path;

use crate::error::ReportResult;
use crate::types::{RecordSet, Row};

/// Read a CSV file into a [`RecordSet`].
///
/// Rules:
///
/// - The first line is a header naming the fields.
/// - Every following record becomes one [`Row`] keyed by those names.
/// - Records shorter than the header omit the missing trailing fields; extra values are dropped.
/// - With `trim_headers`, surrounding whitespace is removed from field names.
pub fn read_csv_from_path(
    path: impl AsRef<Path>,
    delimiter: u8,
    trim_headers: bool,
) -> ReportResult<RecordSet> {
    let mut rdr = reader_builder(delimiter).from_path(path)?;
    read_csv_from_reader(&mut rdr, trim_headers)
}

/// Read CSV data from an existing reader built with headers enabled.
///
/// When `trim_headers` is set, surrounding whitespace is removed from field names.
pub fn read_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    trim_headers: bool,
) -> ReportResult<RecordSet> {
    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| (if trim_headers { h.trim() } else { h }).to_owned())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(Row::from_pairs(headers.iter().cloned().zip(record.iter())));
    }

    Ok(RecordSet::new(rows))
}

/// Reader configuration shared by path- and reader-based callers.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).delimiter(delimiter);
    builder
}
