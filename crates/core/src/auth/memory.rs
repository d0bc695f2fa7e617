//! In-memory account store for tests and local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use ledgerly_shared::types::{SessionId, UserId};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::account::AccountStore;
use super::identity::{IdentityStore, SessionRecord, UserRecord};
use crate::store::StoreError;

/// Users and sessions held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    users: RwLock<Vec<UserRecord>>,
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl InMemoryAccountStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a user without any checks.
    pub async fn put_user(&self, user: UserRecord) {
        let mut users = self.users.write().await;
        users.retain(|u| u.id != user.id);
        users.push(user);
    }

    /// Deletes a user, leaving their sessions dangling.
    pub async fn remove_user(&self, id: UserId) {
        self.users.write().await.retain(|u| u.id != id);
    }

    /// Opens a session for `user_id` and returns its token.
    pub async fn open_session(&self, user_id: UserId) -> String {
        let session = SessionRecord {
            id: SessionId::new(),
            user_id,
            token: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        };
        let token = session.token.clone();
        self.sessions.write().await.insert(token.clone(), session);
        token
    }
}

#[async_trait]
impl IdentityStore for InMemoryAccountStore {
    async fn find_session_by_token(
        &self,
        token: &str,
    ) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(format!("users.email = {}", user.email)));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn insert_session(&self, session: &SessionRecord) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        Ok(())
    }
}
