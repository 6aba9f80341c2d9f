//! Row validation rules.
//!
//! A [`RowValidator`] is a pure predicate: it never fails, it only answers whether a row can take
//! part in an aggregation. Rows it rejects are skipped silently.

use crate::error::{ReportError, ReportResult};
use crate::types::Row;

/// Range rule applied to the parsed numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ValueRule {
    /// Any finite number.
    #[default]
    Any,
    /// Strictly greater than zero.
    Positive,
    /// Inclusive bounds; a missing side is unbounded.
    Bounded { min: Option<f64>, max: Option<f64> },
}

impl ValueRule {
    /// Build a [`ValueRule::Bounded`] rule, rejecting non-finite or inverted bounds.
    pub fn bounded(min: Option<f64>, max: Option<f64>) -> ReportResult<Self> {
        for bound in [min, max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(ReportError::InvalidConfig {
                    message: format!("value bound must be finite, got {bound}"),
                });
            }
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(ReportError::InvalidConfig {
                    message: format!("minimum value {lo} is greater than maximum value {hi}"),
                });
            }
        }
        Ok(Self::Bounded { min, max })
    }

    /// Returns true if `value` satisfies the rule.
    pub fn accepts(&self, value: f64) -> bool {
        match *self {
            Self::Any => true,
            Self::Positive => value > 0.0,
            Self::Bounded { min, max } => {
                min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
            }
        }
    }
}

/// Parse a raw cell as a finite `f64`, ignoring surrounding whitespace.
///
/// `NaN` and infinities are rejected even though `f64::from_str` accepts them.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validity check for one `(categorical key, numeric value)` field pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RowValidator {
    key_field: String,
    value_field: String,
    rule: ValueRule,
}

impl RowValidator {
    /// Validator accepting any finite value in `value_field`.
    pub fn new(key_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            value_field: value_field.into(),
            rule: ValueRule::Any,
        }
    }

    /// Replace the numeric range rule.
    pub fn with_rule(mut self, rule: ValueRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// Returns true if the row has both fields, a non-blank key, and a number the rule accepts.
    pub fn validate(&self, row: &Row) -> bool {
        self.accepted_value(row).is_some()
    }

    /// The parsed numeric value if the row is valid.
    pub fn accepted_value(&self, row: &Row) -> Option<f64> {
        let key = row.get(&self.key_field)?;
        if key.trim().is_empty() {
            return None;
        }
        let value = parse_number(row.get(&self.value_field)?)?;
        self.rule.accepts(value).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_number, RowValidator, ValueRule};
    use crate::types::Row;

    fn price_validator() -> RowValidator {
        RowValidator::new("brand", "price").with_rule(ValueRule::Positive)
    }

    #[test]
    fn parse_number_trims_and_rejects_non_finite() {
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("-500"), Some(-500.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("bad"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn missing_fields_are_invalid_not_errors() {
        let v = price_validator();
        assert!(!v.validate(&Row::new()));
        assert!(!v.validate(&Row::from_pairs([("brand", "Apple")])));
        assert!(!v.validate(&Row::from_pairs([("price", "500")])));
    }

    #[test]
    fn blank_key_is_invalid() {
        let v = price_validator();
        assert!(!v.validate(&Row::from_pairs([("brand", "   "), ("price", "500")])));
        assert!(!v.validate(&Row::from_pairs([("brand", ""), ("price", "")])));
    }

    #[test]
    fn positive_rule_rejects_zero_and_negatives() {
        let v = price_validator();
        assert!(!v.validate(&Row::from_pairs([("brand", "Apple"), ("price", "0")])));
        assert!(!v.validate(&Row::from_pairs([("brand", "Apple"), ("price", "-500")])));
        assert!(v.validate(&Row::from_pairs([("brand", "Apple"), ("price", "0.01")])));
    }

    #[test]
    fn any_rule_accepts_negative_values() {
        let v = RowValidator::new("brand", "rating");
        assert_eq!(
            v.accepted_value(&Row::from_pairs([("brand", "Apple"), ("rating", "-1")])),
            Some(-1.0)
        );
    }

    #[test]
    fn bounded_rule_is_inclusive() {
        let rule = ValueRule::bounded(Some(0.0), Some(5.0)).unwrap();
        assert!(rule.accepts(0.0));
        assert!(rule.accepts(5.0));
        assert!(!rule.accepts(5.01));
        assert!(!rule.accepts(-0.5));

        let open_top = ValueRule::bounded(Some(1.0), None).unwrap();
        assert!(open_top.accepts(1e9));
    }

    #[test]
    fn bounded_rule_rejects_inverted_or_non_finite_bounds() {
        assert!(ValueRule::bounded(Some(5.0), Some(1.0)).is_err());
        assert!(ValueRule::bounded(Some(f64::NAN), None).is_err());
        assert!(ValueRule::bounded(None, Some(f64::INFINITY)).is_err());
    }
}
