//! Statement ledger.
//!
//! This module implements the per-user income/outflow ledger:
//! - Statement domain types and the wire candidate
//! - Validation rules with aggregated messages
//! - The persistence port and an in-memory store
//! - Ownership-checked lifecycle operations
//! - Balance derivation

pub mod balance;
pub mod engine;
pub mod error;
pub mod memory;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod engine_props;
#[cfg(test)]
mod validation_props;

pub use balance::aggregate_balance;
pub use engine::LedgerEngine;
pub use error::LedgerError;
pub use memory::InMemoryStatementStore;
pub use store::StatementStore;
pub use types::{Statement, StatementCandidate, StatementPatch, StatementType, ValidStatement};
pub use validation::{StatementRules, ValidationErrors, validate_statement};
