//! Ledger store port.
//!
//! The engine never touches storage directly; adapters implement
//! [`StatementStore`] over a database or process memory. Writes are
//! conditional on ownership so that a record cannot change hands or type
//! between the engine's read and its write.

use async_trait::async_trait;
use ledgerly_shared::types::StatementId;

use super::types::{Statement, StatementPatch, StatementType};
use crate::store::StoreError;

/// CRUD over statement records keyed by id and owner.
#[async_trait]
pub trait StatementStore: Send + Sync {
    /// Persists a new statement.
    async fn insert(&self, statement: &Statement) -> Result<(), StoreError>;

    /// Finds a statement by id, regardless of owner.
    async fn find_by_id(&self, id: StatementId) -> Result<Option<Statement>, StoreError>;

    /// Returns every statement of `owner` in insertion order, oldest first.
    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<Statement>, StoreError>;

    /// Applies `patch` to the record matching id, owner and type in one write.
    ///
    /// Returns the number of records changed (0 or 1).
    async fn update_fields(
        &self,
        id: StatementId,
        owner: &str,
        expected_type: StatementType,
        patch: &StatementPatch,
    ) -> Result<u64, StoreError>;

    /// Deletes the record matching id and owner.
    ///
    /// Returns the number of records removed (0 or 1).
    async fn delete_by_id(&self, id: StatementId, owner: &str) -> Result<u64, StoreError>;

    /// Releases the underlying resources.
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
