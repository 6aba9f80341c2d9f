//! `tabular-report` reads one or more CSV files and prints a grouped average: the mean of a numeric
//! field per brand, sorted by brand and ranked from 1.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`ingestion::read_sources`] checks every path (must exist and end in `.csv`) and then
//!    concatenates all rows into one [`types::RecordSet`].
//! 2. A [`reports::Report`] validates each [`types::Row`]; invalid rows are skipped silently.
//! 3. Valid rows are grouped by normalized key (trimmed, lowercased) and averaged.
//! 4. [`reports::format`] sorts the groups, assigns ranks, rounds to two decimals, and renders.
//!
//! ## Report types
//!
//! - `average-price`: `brand` + `price`; prices must be strictly positive
//! - `average-rating`: `brand` + `rating`; any finite rating
//!
//! ## Example
//!
//! ```rust
//! use tabular_report::reports::{AveragePriceReport, Report};
//! use tabular_report::types::{RecordSet, Row};
//!
//! let rows = RecordSet::new(vec![
//!     Row::from_pairs([("brand", "Apple"), ("price", "1000")]),
//!     Row::from_pairs([("brand", "Apple"), ("price", "1100")]),
//!     Row::from_pairs([("brand", "Samsung"), ("price", "800")]),
//!     Row::from_pairs([("brand", "Samsung"), ("price", "900")]),
//! ]);
//!
//! let table = AveragePriceReport::new().generate(&rows);
//! assert_eq!(table.rows[0].key, "apple");
//! assert_eq!(table.rows[0].value, 1050.0);
//! assert_eq!(table.rows[1].rank, 2);
//! ```
//!
//! ## End to end
//!
//! ```no_run
//! use tabular_report::dispatch::{run_and_render, ReportConfig};
//!
//! # fn main() -> Result<(), tabular_report::ReportError> {
//! let config = ReportConfig::from_name("average-rating", vec!["products.csv".into()])?;
//! println!("{}", run_and_render(&config)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: reading and checking input files
//! - [`types`]: rows, record sets, and report tables
//! - [`processing`]: validation, grouping, mean, rounding
//! - [`reports`]: report types and table rendering
//! - [`dispatch`]: report selection and the full pipeline
//! - [`cli`]: command-line arguments
//! - [`error`]: error type used across the crate

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod reports;
pub mod types;

pub use error::{ReportError, ReportResult};
