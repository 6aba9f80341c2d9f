//! Grouping valid rows by a normalized key.

use std::collections::BTreeMap;

use log::debug;

use crate::types::RecordSet;

use super::filter::valid_rows;
use super::validate::RowValidator;

/// Group key -> parsed values of every valid row in the group.
///
/// A key is present only if at least one valid row mapped to it, so no list is ever empty.
pub type GroupedValues = BTreeMap<String, Vec<f64>>;

/// Normalize a categorical value into a group key: trim, then lowercase.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Collect the numeric field of every row `validator` accepts, keyed by the normalized key field.
///
/// Rows are first narrowed with [`valid_rows`]; only the survivors are grouped.
pub fn group_values(records: &RecordSet, validator: &RowValidator) -> GroupedValues {
    let valid = valid_rows(records, validator);
    let groups = valid.reduce_rows(GroupedValues::new(), |mut groups, row| {
        if let (Some(key), Some(value)) = (row.get(validator.key_field()), validator.accepted_value(row)) {
            groups.entry(normalize_key(key)).or_default().push(value);
        }
        groups
    });

    debug!(
        "grouped {} rows by '{}': {} groups, {} rows skipped",
        records.row_count(),
        validator.key_field(),
        groups.len(),
        records.row_count() - valid.row_count()
    );
    groups
}
