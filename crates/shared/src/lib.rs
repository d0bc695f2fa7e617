//! Shared types, errors, and configuration for Ledgerly.
//!
//! This crate provides common types used across all other crates:
//! - Amount type with fixed two-digit decimal precision
//! - Typed IDs for type-safe entity references
//! - Sign-up / sign-in payloads
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LedgerConfig};
pub use error::AppError;
