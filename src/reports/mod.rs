//! Report implementations.
//!
//! Every report type implements [`Report`]: a [`RowValidator`] decides which rows count, the
//! valid rows are grouped by normalized key, and [`format::build_table`] turns the group means
//! into a ranked [`ReportTable`].
//!
//! - [`AveragePriceReport`]: mean `price` per `brand`, prices must be > 0
//! - [`AverageRatingReport`]: mean `rating` per `brand`, any finite rating

pub mod average_price;
pub mod average_rating;
pub mod format;

use log::debug;

use crate::processing::{group_values, GroupedValues, RowValidator};
use crate::types::{RecordSet, ReportTable, Row};

pub use average_price::AveragePriceReport;
pub use average_rating::AverageRatingReport;
pub use format::{build_table, render, render_text, OutputFormat};

/// Shared contract for report types.
pub trait Report {
    /// Identifier used on the command line.
    fn name(&self) -> &'static str;

    /// Validity rule for input rows.
    fn validator(&self) -> &RowValidator;

    /// Column labels for the output table.
    fn headers(&self) -> Vec<String>;

    /// Returns true if `row` takes part in the aggregation.
    fn validate(&self, row: &Row) -> bool {
        self.validator().validate(row)
    }

    /// Group valid values by normalized key.
    fn aggregate(&self, records: &RecordSet) -> GroupedValues {
        group_values(records, self.validator())
    }

    /// Run the report over `records`.
    fn generate(&self, records: &RecordSet) -> ReportTable {
        let table = build_table(&self.aggregate(records), self.headers());
        debug!(
            "report '{}' produced {} rows from {} input rows",
            self.name(),
            table.row_count(),
            records.row_count()
        );
        table
    }
}
