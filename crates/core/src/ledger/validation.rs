//! Statement validation.
//!
//! Every rule runs; all violations are reported together.

use std::str::FromStr;

use ledgerly_shared::{LedgerConfig, types::Amount};
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use thiserror::Error;

use super::types::{StatementCandidate, StatementType, ValidStatement};
use crate::sanitize::strip_markup;

/// Field-level violations, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join(", "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    /// Returns the individual messages.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

/// Bounds applied by [`validate_statement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRules {
    /// Maximum description length in characters.
    pub description_max_len: usize,
    /// Exclusive ceiling for the value.
    pub value_ceiling: Decimal,
}

impl Default for StatementRules {
    fn default() -> Self {
        LedgerConfig::default().into()
    }
}

impl From<LedgerConfig> for StatementRules {
    fn from(config: LedgerConfig) -> Self {
        Self {
            description_max_len: config.description_max_len,
            value_ceiling: config.value_ceiling,
        }
    }
}

/// Validates a raw candidate against `rules`.
pub fn validate_statement(
    candidate: &StatementCandidate,
    rules: &StatementRules,
) -> Result<ValidStatement, ValidationErrors> {
    let mut errors = Vec::new();

    let description = check_description(candidate.description.as_ref(), rules, &mut errors);
    let value = check_value(candidate.value.as_ref(), rules, &mut errors);
    let statement_type = check_type(candidate.statement_type.as_ref(), &mut errors);

    match (description, value, statement_type) {
        (Some(description), Some(value), Some(statement_type)) if errors.is_empty() => {
            Ok(ValidStatement {
                description,
                value,
                statement_type,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn check_description(
    raw: Option<&Value>,
    rules: &StatementRules,
    errors: &mut Vec<String>,
) -> Option<String> {
    let Some(raw) = present(raw) else {
        errors.push("\"description\" is required".to_string());
        return None;
    };
    let Some(text) = raw.as_str() else {
        errors.push("\"description\" must be a string".to_string());
        return None;
    };

    let clean = strip_markup(text);
    if clean.is_empty() {
        errors.push("\"description\" is not allowed to be empty".to_string());
        return None;
    }
    if clean.chars().count() > rules.description_max_len {
        errors.push(format!(
            "\"description\" length must be less than or equal to {} characters long",
            rules.description_max_len
        ));
        return None;
    }
    Some(clean)
}

/// Reads a JSON number as a decimal from its shortest textual form.
fn number_to_decimal(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Reports a finite number too large or too precise for a decimal.
fn out_of_range(number: &Number, rules: &StatementRules, errors: &mut Vec<String>) {
    let magnitude = number.as_f64().unwrap_or_default();
    if magnitude.is_sign_negative() {
        errors.push("\"value\" must be a positive number".to_string());
    } else if magnitude.abs() >= 1.0 {
        errors.push(format!("\"value\" must be less than {}", rules.value_ceiling));
    } else {
        errors.push("\"value\" must have no more than 2 decimal places".to_string());
    }
}

fn check_value(
    raw: Option<&Value>,
    rules: &StatementRules,
    errors: &mut Vec<String>,
) -> Option<Amount> {
    let Some(raw) = present(raw) else {
        errors.push("\"value\" is required".to_string());
        return None;
    };
    let Some(number) = raw.as_number() else {
        errors.push("\"value\" must be a number".to_string());
        return None;
    };
    let Some(amount) = number_to_decimal(number).map(Amount::new) else {
        out_of_range(number, rules, errors);
        return None;
    };

    let before = errors.len();
    if !amount.is_positive() {
        errors.push("\"value\" must be a positive number".to_string());
    }
    if !amount.fits_cents() {
        errors.push("\"value\" must have no more than 2 decimal places".to_string());
    }
    if amount.value() >= rules.value_ceiling {
        errors.push(format!(
            "\"value\" must be less than {}",
            rules.value_ceiling
        ));
    }
    (errors.len() == before).then_some(amount)
}

fn check_type(raw: Option<&Value>, errors: &mut Vec<String>) -> Option<StatementType> {
    let Some(raw) = present(raw) else {
        errors.push("\"type\" is required".to_string());
        return None;
    };

    let parsed = raw
        .as_str()
        .map(strip_markup)
        .and_then(|code| StatementType::from_code(&code));
    if parsed.is_none() {
        errors.push("\"type\" must be one of [I, O]".to_string());
    }
    parsed
}
