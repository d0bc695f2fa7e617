//! Core business logic for Ledgerly.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage is reached only through the async ports in [`store`], [`auth`] and
//! [`ledger::store`]; in-memory implementations ship alongside for tests.
//!
//! # Modules
//!
//! - `auth` - Identity resolution, sign-up/sign-in, password hashing
//! - `ledger` - Statement validation, the ledger engine and balance aggregation
//! - `sanitize` - Markup stripping for free-text input
//! - `store` - Errors shared by every storage port

pub mod auth;
pub mod ledger;
pub mod sanitize;
pub mod store;
