//! Registration and sign-in.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use ledgerly_shared::{
    AppError,
    auth::{SignInRequest, SignInResponse, SignUpRequest},
    types::{SessionId, UserId},
};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;
use validator::ValidateEmail;

use super::identity::{SessionRecord, UserRecord};
use super::password::{PasswordError, hash_password, verify_password};
use crate::sanitize::strip_markup;
use crate::store::StoreError;

/// Writes and lookups needed for registration and sign-in.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Finds a user by exact email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Persists a new user. A taken email is [`StoreError::Duplicate`].
    async fn insert_user(&self, user: &UserRecord) -> Result<(), StoreError>;

    /// Persists a new session.
    async fn insert_session(&self, session: &SessionRecord) -> Result<(), StoreError>;
}

/// Errors from sign-up and sign-in.
#[derive(Debug, Error)]
pub enum AccountError {
    /// One or more fields are invalid.
    #[error("invalid account payload: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Email is already registered.
    #[error("Email '{0}' already registered")]
    EmailTaken(String),

    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("Invalid User and/or Password")]
    InvalidCredentials,

    /// Hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Storage failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(messages) => Self::Validation(messages),
            AccountError::EmailTaken(_) => Self::Conflict(err.to_string()),
            AccountError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AccountError::Password(e) => Self::Internal(e.to_string()),
            AccountError::Store(e) => e.into(),
        }
    }
}

struct SignUpFields {
    name: String,
    email: String,
    password: String,
}

struct SignInFields {
    email: String,
    password: String,
}

fn required_text(field: &str, raw: Option<&str>, errors: &mut Vec<String>) -> Option<String> {
    let Some(raw) = raw else {
        errors.push(format!("\"{field}\" is required"));
        return None;
    };
    let clean = strip_markup(raw);
    if clean.is_empty() {
        errors.push(format!("\"{field}\" is not allowed to be empty"));
        return None;
    }
    Some(clean)
}

fn required_email(raw: Option<&str>, errors: &mut Vec<String>) -> Option<String> {
    let email = required_text("email", raw, errors)?;
    if email.validate_email() {
        Some(email)
    } else {
        errors.push("\"email\" must be a valid email".to_string());
        None
    }
}

fn validate_sign_up(req: &SignUpRequest) -> Result<SignUpFields, AccountError> {
    let mut errors = Vec::new();

    let name = required_text("name", req.name.as_deref(), &mut errors);
    let email = required_email(req.email.as_deref(), &mut errors);
    let password = required_text("password", req.password.as_deref(), &mut errors);
    let repeat = req.repeat_password.as_deref().map(strip_markup);

    match (&password, &repeat) {
        (Some(_), None) => {
            errors.push("\"password\" missing required peer \"repeat_password\"".to_string());
        }
        (Some(p), Some(r)) if p != r => {
            errors.push("\"repeat_password\" must be [ref:password]".to_string());
        }
        _ => {}
    }

    match (name, email, password) {
        (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(SignUpFields {
            name,
            email,
            password,
        }),
        _ => Err(AccountError::Validation(errors)),
    }
}

fn validate_sign_in(req: &SignInRequest) -> Result<SignInFields, AccountError> {
    let mut errors = Vec::new();

    let email = required_email(req.email.as_deref(), &mut errors);
    let password = required_text("password", req.password.as_deref(), &mut errors);

    match (email, password) {
        (Some(email), Some(password)) => Ok(SignInFields { email, password }),
        _ => Err(AccountError::Validation(errors)),
    }
}

/// Registration and sign-in over an [`AccountStore`].
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Registers a new user.
    pub async fn sign_up(&self, req: &SignUpRequest) -> Result<UserRecord, AccountError> {
        let fields = validate_sign_up(req)?;

        if self.store.find_user_by_email(&fields.email).await?.is_some() {
            info!(email = %fields.email, "Sign-up with registered email");
            return Err(AccountError::EmailTaken(fields.email));
        }

        let user = UserRecord {
            id: UserId::new(),
            name: fields.name,
            email: fields.email,
            password_hash: hash_password(&fields.password)?,
        };

        match self.store.insert_user(&user).await {
            Ok(()) => {}
            Err(StoreError::Duplicate(_)) => return Err(AccountError::EmailTaken(user.email)),
            Err(e) => {
                error!(error = %e, "Failed to persist user");
                return Err(e.into());
            }
        }

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Checks credentials and opens a new session.
    pub async fn sign_in(&self, req: &SignInRequest) -> Result<SignInResponse, AccountError> {
        let fields = validate_sign_in(req)?;

        let Some(user) = self.store.find_user_by_email(&fields.email).await? else {
            info!(email = %fields.email, "Sign-in for unknown email");
            return Err(AccountError::InvalidCredentials);
        };

        if !verify_password(&fields.password, &user.password_hash)? {
            info!(user_id = %user.id, "Sign-in with wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        let session = SessionRecord {
            id: SessionId::new(),
            user_id: user.id,
            token: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        };
        self.store
            .insert_session(&session)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to persist session"))?;

        info!(user_id = %user.id, session_id = %session.id, "User signed in");
        Ok(SignInResponse {
            token: session.token,
            name: user.name,
        })
    }
}
