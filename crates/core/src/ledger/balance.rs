//! Balance aggregation.
//!
//! Income adds, outflow subtracts, starting from zero. The total is snapped
//! to two fractional digits (half away from zero) after the fold, whatever
//! precision the inputs carried.

use ledgerly_shared::types::Amount;

use super::types::Statement;

/// Folds statements into a signed balance rounded to cents.
pub fn aggregate_balance<'a, I>(statements: I) -> Amount
where
    I: IntoIterator<Item = &'a Statement>,
{
    statements
        .into_iter()
        .map(|s| s.statement_type.signed(s.value))
        .sum::<Amount>()
        .round_to_cents()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::StatementType;
    use chrono::Utc;
    use ledgerly_shared::types::StatementId;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn statement(statement_type: StatementType, value: Decimal) -> Statement {
        Statement {
            id: StatementId::new(),
            description: "x".into(),
            value: Amount::new(value),
            statement_type,
            owner: "ana@example.com".into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_salary_minus_rent() {
        let statements = vec![
            statement(StatementType::Income, dec!(1500.00)),
            statement(StatementType::Outflow, dec!(500.00)),
        ];
        assert_eq!(aggregate_balance(&statements).value(), dec!(1000.00));
    }

    #[test]
    fn test_empty_is_zero_with_cents() {
        let balance = aggregate_balance(&Vec::<Statement>::new());
        assert!(balance.is_zero());
        assert_eq!(balance.value().scale(), 2);
    }

    #[test]
    fn test_negative_balance() {
        let statements = vec![
            statement(StatementType::Income, dec!(10.10)),
            statement(StatementType::Outflow, dec!(20.25)),
        ];
        assert_eq!(aggregate_balance(&statements).value(), dec!(-10.15));
    }

    #[test]
    fn test_many_small_values_do_not_drift() {
        let statements: Vec<_> = (0..1000)
            .map(|_| statement(StatementType::Income, dec!(0.10)))
            .collect();
        assert_eq!(aggregate_balance(&statements).value(), dec!(100.00));
    }

    fn cents() -> impl Strategy<Value = Decimal> {
        (1i64..10_000_000i64).prop_map(|c| Decimal::new(c, 2))
    }

    fn entry() -> impl Strategy<Value = (bool, Decimal)> {
        (any::<bool>(), cents())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Balance equals incomes minus outflows for any mix of entries.
        #[test]
        fn prop_balance_is_income_minus_outflow(entries in prop::collection::vec(entry(), 0..50)) {
            let statements: Vec<_> = entries
                .iter()
                .map(|&(income, v)| {
                    statement(if income { StatementType::Income } else { StatementType::Outflow }, v)
                })
                .collect();

            let income: Decimal = entries.iter().filter(|(i, _)| *i).map(|(_, v)| *v).sum();
            let outflow: Decimal = entries.iter().filter(|(i, _)| !*i).map(|(_, v)| *v).sum();

            prop_assert_eq!(aggregate_balance(&statements).value(), (income - outflow).round_dp(2));
        }

        /// Insertion order never changes the balance.
        #[test]
        fn prop_balance_is_order_independent(entries in prop::collection::vec(entry(), 1..30)) {
            let forward: Vec<_> = entries
                .iter()
                .map(|&(income, v)| {
                    statement(if income { StatementType::Income } else { StatementType::Outflow }, v)
                })
                .collect();
            let mut backward = forward.clone();
            backward.reverse();

            prop_assert_eq!(aggregate_balance(&forward), aggregate_balance(&backward));
        }
    }
}
