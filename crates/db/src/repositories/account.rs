//! Account storage: users plus their sessions.
//!
//! Implements both auth ports of `ledgerly-core` over the user and session
//! repositories.

use async_trait::async_trait;
use ledgerly_core::auth::{AccountStore, IdentityStore, SessionRecord, UserRecord};
use ledgerly_core::store::StoreError;
use ledgerly_shared::types::UserId;
use sea_orm::DatabaseConnection;

use super::{SessionRepository, UserRepository, store_error};

/// Users and sessions behind the auth ports.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    users: UserRepository,
    sessions: SessionRepository,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            sessions: SessionRepository::new(db),
        }
    }
}

#[async_trait]
impl IdentityStore for AccountRepository {
    async fn find_session_by_token(
        &self,
        token: &str,
    ) -> Result<Option<SessionRecord>, StoreError> {
        let session = self
            .sessions
            .find_by_token(token)
            .await
            .map_err(store_error)?;
        Ok(session.map(SessionRecord::from))
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        let user = self
            .users
            .find_by_id(id.into_inner())
            .await
            .map_err(store_error)?;
        Ok(user.map(UserRecord::from))
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(store_error)?;
        Ok(user.map(UserRecord::from))
    }

    async fn insert_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        self.users.create(user).await.map_err(store_error)?;
        Ok(())
    }

    async fn insert_session(&self, session: &SessionRecord) -> Result<(), StoreError> {
        self.sessions.create(session).await.map_err(store_error)?;
        Ok(())
    }
}
