//! In-memory validation and aggregation over a [`crate::types::RecordSet`].
//!
//! - [`validate`]: per-row validity rules ([`RowValidator`], [`ValueRule`])
//! - [`filter()`]: row filtering by predicate
//! - [`group_values()`]: bucket valid values by normalized key
//! - [`reduce`]: mean and display rounding
//!
//! ## Example: validate → group → mean
//!
//! ```rust
//! use tabular_report::processing::{group_values, mean, round2, RowValidator, ValueRule};
//! use tabular_report::types::{RecordSet, Row};
//!
//! let rows = RecordSet::new(vec![
//!     Row::from_pairs([("brand", "Apple"), ("price", "1000")]),
//!     Row::from_pairs([("brand", " apple "), ("price", "1100")]),
//!     Row::from_pairs([("brand", "Samsung"), ("price", "0")]),
//! ]);
//!
//! let validator = RowValidator::new("brand", "price").with_rule(ValueRule::Positive);
//! let groups = group_values(&rows, &validator);
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(mean(&groups["apple"]).map(round2), Some(1050.0));
//! ```

pub mod filter;
pub mod group;
pub mod reduce;
pub mod validate;

pub use filter::{filter, valid_rows};
pub use group::{group_values, normalize_key, GroupedValues};
pub use reduce::{group_means, mean, round2};
pub use validate::{parse_number, RowValidator, ValueRule};
