//! Identity resolution: bearer credential to authenticated user.
//!
//! This is the single trust boundary. Every ledger operation takes a
//! [`UserIdentity`], and the only production path to one is
//! [`IdentityResolver::resolve`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ledgerly_shared::{
    AppError,
    types::{SessionId, UserId},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;

/// A registered user as persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Store identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique email; the ledger's ownership key.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

/// A token-to-user binding created at sign-in.
///
/// Sessions carry no expiry and are never revoked by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Store identifier.
    pub id: SessionId,
    /// The user this session authenticates.
    pub user_id: UserId,
    /// Opaque bearer token, matched exactly.
    pub token: String,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller of a ledger operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Store identifier of the user.
    pub user_id: UserId,
    /// Email, used as the statement owner.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl From<UserRecord> for UserIdentity {
    fn from(user: UserRecord) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Read-only lookups needed to resolve a credential.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Finds a session by exact token match.
    async fn find_session_by_token(&self, token: &str)
    -> Result<Option<SessionRecord>, StoreError>;

    /// Finds a user by store identifier.
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError>;
}

/// Reasons a credential does not resolve to a user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential, or only whitespace after stripping the scheme.
    #[error("Invalid token")]
    MissingCredential,

    /// No session matches the token.
    #[error("Invalid session")]
    InvalidSession,

    /// The session points to a user that no longer exists.
    #[error("User not found")]
    UserNotFound,

    /// Lookup failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential => Self::Unauthorized(err.to_string()),
            AuthError::InvalidSession | AuthError::UserNotFound => {
                Self::InvalidSession(err.to_string())
            }
            AuthError::Store(e) => e.into(),
        }
    }
}

/// Extracts the credential from an `Authorization` header value.
///
/// The first `Bearer` is removed wherever it appears and the rest is
/// trimmed; an empty remainder means no credential.
#[must_use]
pub fn extract_bearer_token(header: &str) -> Option<String> {
    let token = header.replacen("Bearer", "", 1);
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Resolves bearer credentials to user identities.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn IdentityStore>,
}

impl IdentityResolver {
    /// Creates a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Resolves a raw `Authorization` header value.
    pub async fn resolve_header(&self, header: Option<&str>) -> Result<UserIdentity, AuthError> {
        let token = header
            .and_then(extract_bearer_token)
            .ok_or(AuthError::MissingCredential)?;
        self.resolve(&token).await
    }

    /// Resolves an already-extracted credential.
    pub async fn resolve(&self, credential: &str) -> Result<UserIdentity, AuthError> {
        let token = credential.trim();
        if token.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let session = self
            .store
            .find_session_by_token(token)
            .await
            .inspect_err(|e| error!(error = %e, "Session lookup failed"))?
            .ok_or_else(|| {
                debug!("No session for presented token");
                AuthError::InvalidSession
            })?;

        let user = self
            .store
            .find_user_by_id(session.user_id)
            .await
            .inspect_err(|e| error!(error = %e, "User lookup failed"))?
            .ok_or_else(|| {
                debug!(user_id = %session.user_id, session_id = %session.id, "Session user is gone");
                AuthError::UserNotFound
            })?;

        Ok(user.into())
    }
}
