//! Property-based tests for LedgerEngine.
//!
//! - Owner always equals the creating identity
//! - Updates never change type or owner
//! - A foreign identity can neither read, update nor delete
//! - Balance equals income minus outflow of the caller only

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use super::engine::LedgerEngine;
use super::error::LedgerError;
use super::memory::InMemoryStatementStore;
use super::types::{StatementCandidate, StatementType};
use super::validation::StatementRules;
use crate::auth::UserIdentity;
use ledgerly_shared::types::UserId;

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn engine() -> LedgerEngine {
    LedgerEngine::new(
        Arc::new(InMemoryStatementStore::new()),
        StatementRules::default(),
    )
}

fn identity(email: &str) -> UserIdentity {
    UserIdentity {
        user_id: UserId::new(),
        email: email.into(),
        name: "Someone".into(),
    }
}

fn candidate(description: &str, value: Decimal, statement_type: StatementType) -> StatementCandidate {
    let number: Value = serde_json::from_str(&value.to_string()).unwrap();
    serde_json::from_value(json!({
        "description": description,
        "value": number,
        "type": statement_type.code(),
    }))
    .unwrap()
}

fn cents() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|c| Decimal::new(c, 2))
}

fn statement_type() -> impl Strategy<Value = StatementType> {
    prop_oneof![Just(StatementType::Income), Just(StatementType::Outflow)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_update_preserves_type_and_owner(
        initial in cents(),
        next in cents(),
        kind in statement_type(),
    ) {
        run(async {
            let engine = engine();
            let ana = identity("ana@example.com");
            let created = engine.create(&ana, &candidate("Before", initial, kind)).await.unwrap();

            let updated = engine
                .update(&ana, created.id, &candidate("After", next, kind))
                .await
                .unwrap();
            let stored = engine.get(&ana, created.id).await.unwrap();

            assert_eq!(stored.statement_type, kind);
            assert_eq!(stored.owner, "ana@example.com");
            assert_eq!(stored.value.value(), next);
            assert_eq!(stored, updated);
        });
    }

    #[test]
    fn prop_foreign_identity_is_always_forbidden(
        value in cents(),
        kind in statement_type(),
        local in "[a-z]{1,8}",
    ) {
        prop_assume!(local != "ana");
        run(async {
            let engine = engine();
            let ana = identity("ana@example.com");
            let other = identity(&format!("{local}@example.com"));
            let created = engine.create(&ana, &candidate("Mine", value, kind)).await.unwrap();

            assert!(matches!(engine.get(&other, created.id).await, Err(LedgerError::Forbidden(_))));
            assert!(matches!(
                engine.update(&other, created.id, &candidate("Theirs", value, kind)).await,
                Err(LedgerError::Forbidden(_))
            ));
            assert!(matches!(engine.delete(&other, created.id).await, Err(LedgerError::Forbidden(_))));
            assert_eq!(engine.get(&ana, created.id).await.unwrap(), created);
        });
    }

    #[test]
    fn prop_balance_is_income_minus_outflow(
        mine in prop::collection::vec((statement_type(), cents()), 0..12),
        theirs in prop::collection::vec((statement_type(), cents()), 0..6),
    ) {
        run(async {
            let engine = engine();
            let ana = identity("ana@example.com");
            let bob = identity("bob@example.com");

            for (kind, value) in &mine {
                engine.create(&ana, &candidate("Mine", *value, *kind)).await.unwrap();
            }
            for (kind, value) in &theirs {
                engine.create(&bob, &candidate("Theirs", *value, *kind)).await.unwrap();
            }

            let expected: Decimal = mine
                .iter()
                .map(|(kind, value)| match kind {
                    StatementType::Income => *value,
                    StatementType::Outflow => -*value,
                })
                .sum();

            assert_eq!(engine.balance(&ana).await.unwrap().value(), expected);
        });
    }

    #[test]
    fn prop_delete_then_everything_is_not_found(value in cents(), kind in statement_type()) {
        run(async {
            let engine = engine();
            let ana = identity("ana@example.com");
            let created = engine.create(&ana, &candidate("Gone", value, kind)).await.unwrap();

            engine.delete(&ana, created.id).await.unwrap();

            assert!(matches!(engine.get(&ana, created.id).await, Err(LedgerError::NotFound(_))));
            assert!(matches!(engine.delete(&ana, created.id).await, Err(LedgerError::NotFound(_))));
            assert!(engine.list(&ana).await.unwrap().is_empty());
        });
    }
}
