//! Building and rendering [`ReportTable`]s.

use clap::ValueEnum;
use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, Row as CRow, Table};

use crate::error::ReportResult;
use crate::processing::{group_means, round2, GroupedValues};
use crate::types::{ReportRow, ReportTable};

/// How a [`ReportTable`] is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pipe-delimited text table.
    #[default]
    Table,
    /// Pretty-printed JSON object with `headers` and `rows`.
    Json,
}

/// Sort groups by key, rank from 1, and round each mean to two decimals.
///
/// Keys are compared by code point; they are already lowercase, so no locale rules apply.
pub fn build_table(groups: &GroupedValues, headers: Vec<String>) -> ReportTable {
    let rows = group_means(groups)
        .into_iter()
        .enumerate()
        .map(|(idx, (key, mean))| ReportRow {
            rank: idx + 1,
            key,
            value: round2(mean),
        })
        .collect();

    ReportTable { headers, rows }
}

/// Render `table` in the requested format.
pub fn render(table: &ReportTable, format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Table => Ok(render_text(table)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
    }
}

/// Pipe-style text table: header row, separator, then one line per report row.
pub fn render_text(table: &ReportTable) -> String {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_header(table.headers.iter().map(String::as_str));
    for row in &table.rows {
        let mut r = CRow::new();
        r.add_cell(Cell::new(row.rank).set_alignment(CellAlignment::Right));
        r.add_cell(Cell::new(&row.key).set_alignment(CellAlignment::Left));
        r.add_cell(Cell::new(format!("{:.2}", row.value)).set_alignment(CellAlignment::Right));
        t.add_row(r);
    }
    t.to_string()
}
