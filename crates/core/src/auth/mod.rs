//! Authentication: who is calling.
//!
//! This module provides:
//! - Identity resolution from bearer credentials
//! - Registration and sign-in
//! - Password hashing with Argon2id
//! - An in-memory store for tests

mod account;
mod identity;
pub mod memory;
mod password;

pub use account::{AccountError, AccountService, AccountStore};
pub use identity::{
    AuthError, IdentityResolver, IdentityStore, SessionRecord, UserIdentity, UserRecord,
    extract_bearer_token,
};
pub use password::{PasswordError, hash_password, verify_password};
