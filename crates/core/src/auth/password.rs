//! Password hashing with Argon2id.
//!
//! Only PHC strings are ever stored; the plaintext never leaves the request.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors that can occur while hashing or checking a password.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Argon2 refused to hash the input.
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// Stored hash is not a PHC string.
    #[error("stored password hash is malformed")]
    MalformedHash,

    /// Verification failed for a reason other than a mismatch.
    #[error("failed to verify password: {0}")]
    Verify(String),
}

/// Hashes `password` with a fresh random salt, returning a PHC string.
///
/// ```
/// use ledgerly_core::auth::hash_password;
///
/// let hash = hash_password("s3cret").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Checks `password` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only a broken hash or backend fault is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}
