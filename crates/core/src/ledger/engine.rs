//! The ledger engine.
//!
//! Authoritative create/read/update/delete of statements and balance
//! derivation, scoped to an authenticated [`UserIdentity`].
//!
//! Update and delete read the record first to classify failures (missing,
//! foreign, type change), then issue a write conditioned on id and owner
//! (and type, for updates). Two valid concurrent updates still race: the
//! later write wins.

use std::sync::Arc;

use chrono::Utc;
use ledgerly_shared::types::{Amount, StatementId};
use tracing::{error, info, warn};

use super::balance::aggregate_balance;
use super::error::LedgerError;
use super::store::StatementStore;
use super::types::{Statement, StatementCandidate, StatementPatch};
use super::validation::{StatementRules, validate_statement};
use crate::auth::UserIdentity;
use crate::store::StoreError;

fn log_store_failure(operation: &'static str) -> impl FnOnce(&StoreError) {
    move |e| error!(operation, error = %e, "Statement store failure")
}

/// Statement lifecycle and balance, backed by a [`StatementStore`].
#[derive(Clone)]
pub struct LedgerEngine {
    store: Arc<dyn StatementStore>,
    rules: StatementRules,
}

impl LedgerEngine {
    /// Creates an engine over `store` enforcing `rules`.
    #[must_use]
    pub fn new(store: Arc<dyn StatementStore>, rules: StatementRules) -> Self {
        Self { store, rules }
    }

    /// Validates and persists a new statement owned by `identity`.
    pub async fn create(
        &self,
        identity: &UserIdentity,
        candidate: &StatementCandidate,
    ) -> Result<Statement, LedgerError> {
        let valid = validate_statement(candidate, &self.rules)?;

        let statement = Statement {
            id: StatementId::new(),
            description: valid.description,
            value: valid.value,
            statement_type: valid.statement_type,
            owner: identity.email.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.store
            .insert(&statement)
            .await
            .inspect_err(log_store_failure("insert"))?;

        info!(
            statement_id = %statement.id,
            owner = %statement.owner,
            statement_type = %statement.statement_type,
            "Statement created"
        );
        Ok(statement)
    }

    /// Lists statements owned by `identity`, newest first.
    pub async fn list(&self, identity: &UserIdentity) -> Result<Vec<Statement>, LedgerError> {
        let mut statements = self
            .store
            .find_all_by_owner(&identity.email)
            .await
            .inspect_err(log_store_failure("find_all_by_owner"))?;
        statements.reverse();
        Ok(statements)
    }

    /// Returns one statement, if it exists and belongs to `identity`.
    pub async fn get(
        &self,
        identity: &UserIdentity,
        id: StatementId,
    ) -> Result<Statement, LedgerError> {
        self.find_owned(identity, id).await
    }

    /// Replaces description and value of an owned statement.
    ///
    /// The payload's type must equal the stored type; a mismatch is
    /// rejected, never corrected.
    pub async fn update(
        &self,
        identity: &UserIdentity,
        id: StatementId,
        candidate: &StatementCandidate,
    ) -> Result<Statement, LedgerError> {
        let valid = validate_statement(candidate, &self.rules)?;
        let stored = self.find_owned(identity, id).await?;

        if stored.statement_type != valid.statement_type {
            info!(
                statement_id = %id,
                stored = %stored.statement_type,
                requested = %valid.statement_type,
                "Rejected statement type change"
            );
            return Err(LedgerError::TypeConflict {
                id,
                stored: stored.statement_type,
                requested: valid.statement_type,
            });
        }

        let patch = StatementPatch {
            description: valid.description,
            value: valid.value,
            updated_at: Utc::now(),
        };
        let changed = self
            .store
            .update_fields(id, &identity.email, stored.statement_type, &patch)
            .await
            .inspect_err(log_store_failure("update_fields"))?;

        if changed == 0 {
            warn!(statement_id = %id, "Statement vanished before update");
            return Err(LedgerError::NotFound(id));
        }

        info!(statement_id = %id, owner = %identity.email, "Statement updated");
        Ok(stored.patched(&patch))
    }

    /// Deletes an owned statement.
    pub async fn delete(&self, identity: &UserIdentity, id: StatementId) -> Result<(), LedgerError> {
        self.find_owned(identity, id).await?;

        let removed = self
            .store
            .delete_by_id(id, &identity.email)
            .await
            .inspect_err(log_store_failure("delete_by_id"))?;

        if removed == 0 {
            warn!(statement_id = %id, "Delete matched no statement");
            return Err(LedgerError::DeleteFailed(id));
        }

        info!(statement_id = %id, owner = %identity.email, "Statement deleted");
        Ok(())
    }

    /// Computes the balance of `identity` from scratch.
    pub async fn balance(&self, identity: &UserIdentity) -> Result<Amount, LedgerError> {
        let statements = self
            .store
            .find_all_by_owner(&identity.email)
            .await
            .inspect_err(log_store_failure("find_all_by_owner"))?;
        Ok(aggregate_balance(&statements))
    }

    /// Closes the underlying store.
    pub async fn close(&self) -> Result<(), LedgerError> {
        self.store
            .close()
            .await
            .inspect_err(log_store_failure("close"))?;
        Ok(())
    }

    async fn find_owned(
        &self,
        identity: &UserIdentity,
        id: StatementId,
    ) -> Result<Statement, LedgerError> {
        let statement = self
            .store
            .find_by_id(id)
            .await
            .inspect_err(log_store_failure("find_by_id"))?
            .ok_or(LedgerError::NotFound(id))?;

        if statement.owner != identity.email {
            warn!(
                statement_id = %id,
                requester = %identity.email,
                "Ownership mismatch on statement access"
            );
            return Err(LedgerError::Forbidden(id));
        }

        Ok(statement)
    }
}
