//! Core data model types.
//!
//! Input files are read into a [`RecordSet`] of untyped [`Row`]s (field name -> raw string).
//! Reports turn a record set into a [`ReportTable`] of ranked [`ReportRow`]s.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single input record: field name -> raw string value.
///
/// No schema is attached; values stay strings until a report parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: BTreeMap<String, String>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(name, value)` pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns true if `field` is present (even when its value is empty).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterate field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered sequence of rows, concatenated across all input files in source-then-row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    /// Rows in ingestion order.
    pub rows: Vec<Row>,
}

impl RecordSet {
    /// Create a record set from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows in the record set.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append all rows of `other`, keeping their order.
    pub fn extend(&mut self, other: RecordSet) {
        self.rows.extend(other.rows);
    }

    /// Iterate rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Create a new record set containing only rows that match `predicate`.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Row) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect();
        Self { rows }
    }

    /// Reduce (fold) all rows into an accumulator value.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &Row) -> A,
    {
        self.rows.iter().fold(init, |acc, row| reducer(acc, row))
    }
}

impl FromIterator<Row> for RecordSet {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// One output line: `(rank, group key, rounded statistic)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based position after sorting by key.
    pub rank: usize,
    /// Normalized group key.
    pub key: String,
    /// Statistic rounded to two decimal places.
    pub value: f64,
}

/// Final ordered, headered output of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    /// Column labels, one per [`ReportRow`] field.
    pub headers: Vec<String>,
    /// Rows sorted by key, ranks ascending from 1.
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
