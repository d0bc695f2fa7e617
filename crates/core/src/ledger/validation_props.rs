//! Property-based tests for statement validation.
//!
//! - Accepted values are positive, fit cents and sit below the ceiling
//! - Excess precision is always rejected
//! - Accepted descriptions never carry markup

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use super::types::{StatementCandidate, StatementType};
use super::validation::{StatementRules, validate_statement};

/// Strategy to generate a value in cents below the default ceiling.
fn cents_below_ceiling() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a statement type code.
fn type_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("I"), Just("O")]
}

fn candidate(description: &str, value: Decimal, code: &str) -> StatementCandidate {
    let number: Value = serde_json::from_str(&value.to_string()).unwrap();
    serde_json::from_value(json!({
        "description": description,
        "value": number,
        "type": code,
    }))
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_values_accepted(
        value in cents_below_ceiling(),
        code in type_code(),
        description in "[A-Za-z][A-Za-z0-9 ]{0,20}",
    ) {
        let valid = validate_statement(
            &candidate(&description, value, code),
            &StatementRules::default(),
        ).unwrap();

        prop_assert_eq!(valid.value.value(), value);
        prop_assert_eq!(valid.statement_type, StatementType::from_code(code).unwrap());
        prop_assert_eq!(valid.description, description.trim());
    }

    #[test]
    fn prop_excess_precision_rejected(
        mills in 1i64..100_000_000i64,
        code in type_code(),
    ) {
        prop_assume!(mills % 10 != 0);
        let value = Decimal::new(mills, 3);

        let err = validate_statement(
            &candidate("Groceries", value, code),
            &StatementRules::default(),
        ).unwrap_err();

        prop_assert!(err
            .messages()
            .iter()
            .any(|m| m == "\"value\" must have no more than 2 decimal places"));
    }

    #[test]
    fn prop_values_at_or_above_ceiling_rejected(
        cents in 10_000_000i64..1_000_000_000i64,
        code in type_code(),
    ) {
        let err = validate_statement(
            &candidate("Car", Decimal::new(cents, 2), code),
            &StatementRules::default(),
        ).unwrap_err();

        prop_assert_eq!(err.messages(), &["\"value\" must be less than 100000".to_string()]);
    }

    #[test]
    fn prop_markup_is_stripped(word in "[a-z]{1,10}", tag in prop_oneof![Just("b"), Just("i"), Just("span")]) {
        let raw = format!("<{tag}>{word}</{tag}>");

        let valid = validate_statement(
            &candidate(&raw, Decimal::ONE, "I"),
            &StatementRules::default(),
        ).unwrap();

        prop_assert_eq!(valid.description, word);
    }
}
