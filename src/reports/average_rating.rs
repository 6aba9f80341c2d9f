//! Average rating per brand.

use crate::processing::{RowValidator, ValueRule};

use super::Report;

/// Mean of `rating` grouped by `brand`.
///
/// By default any finite rating is accepted, including zero and negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageRatingReport {
    validator: RowValidator,
}

impl AverageRatingReport {
    pub const NAME: &'static str = "average-rating";

    pub fn new() -> Self {
        Self::with_rule(ValueRule::Any)
    }

    pub fn with_rule(rule: ValueRule) -> Self {
        Self {
            validator: RowValidator::new("brand", "rating").with_rule(rule),
        }
    }
}

impl Default for AverageRatingReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Report for AverageRatingReport {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validator(&self) -> &RowValidator {
        &self.validator
    }

    fn headers(&self) -> Vec<String> {
        vec!["№".into(), "brand".into(), "rating".into()]
    }
}
