//! In-memory statement store.

use async_trait::async_trait;
use ledgerly_shared::types::StatementId;
use tokio::sync::RwLock;

use super::store::StatementStore;
use super::types::{Statement, StatementPatch, StatementType};
use crate::store::StoreError;

/// Statements held in a vector, in insertion order.
///
/// Each method takes the lock once, so every call is atomic on its own.
#[derive(Debug, Default)]
pub struct InMemoryStatementStore {
    statements: RwLock<Vec<Statement>>,
}

impl InMemoryStatementStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements across all owners.
    pub async fn len(&self) -> usize {
        self.statements.read().await.len()
    }

    /// Returns true if no statements are stored.
    pub async fn is_empty(&self) -> bool {
        self.statements.read().await.is_empty()
    }
}

#[async_trait]
impl StatementStore for InMemoryStatementStore {
    async fn insert(&self, statement: &Statement) -> Result<(), StoreError> {
        let mut statements = self.statements.write().await;
        if statements.iter().any(|s| s.id == statement.id) {
            return Err(StoreError::Duplicate(format!("statements.id = {}", statement.id)));
        }
        statements.push(statement.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: StatementId) -> Result<Option<Statement>, StoreError> {
        Ok(self
            .statements
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<Statement>, StoreError> {
        Ok(self
            .statements
            .read()
            .await
            .iter()
            .filter(|s| s.owner == owner)
            .cloned()
            .collect())
    }

    async fn update_fields(
        &self,
        id: StatementId,
        owner: &str,
        expected_type: StatementType,
        patch: &StatementPatch,
    ) -> Result<u64, StoreError> {
        let mut statements = self.statements.write().await;
        let Some(target) = statements
            .iter_mut()
            .find(|s| s.id == id && s.owner == owner && s.statement_type == expected_type)
        else {
            return Ok(0);
        };
        *target = target.patched(patch);
        Ok(1)
    }

    async fn delete_by_id(&self, id: StatementId, owner: &str) -> Result<u64, StoreError> {
        let mut statements = self.statements.write().await;
        let before = statements.len();
        statements.retain(|s| !(s.id == id && s.owner == owner));
        Ok((before - statements.len()) as u64)
    }
}
