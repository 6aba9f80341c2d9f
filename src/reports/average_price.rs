//! Average price per brand.

use crate::processing::{RowValidator, ValueRule};

use super::Report;

/// Mean of `price` grouped by `brand`. Zero and negative prices are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragePriceReport {
    validator: RowValidator,
}

impl AveragePriceReport {
    pub const NAME: &'static str = "average-price";

    pub fn new() -> Self {
        Self::with_rule(ValueRule::Positive)
    }

    /// Use `rule` instead of the default positivity check.
    pub fn with_rule(rule: ValueRule) -> Self {
        Self {
            validator: RowValidator::new("brand", "price").with_rule(rule),
        }
    }
}

impl Default for AveragePriceReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Report for AveragePriceReport {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validator(&self) -> &RowValidator {
        &self.validator
    }

    fn headers(&self) -> Vec<String> {
        vec!["№".into(), "brand".into(), "average_price".into()]
    }
}
