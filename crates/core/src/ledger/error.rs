//! Ledger error types.
//!
//! One variant per outcome the HTTP boundary must tell apart: malformed
//! input, missing record, ownership mismatch, disallowed type change, a
//! delete that removed nothing, and opaque storage failure.

use ledgerly_shared::{AppError, types::StatementId};
use thiserror::Error;

use super::types::StatementType;
use super::validation::ValidationErrors;
use crate::store::StoreError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// The payload broke one or more field rules.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// No statement has this id.
    #[error("Statement {0} not found")]
    NotFound(StatementId),

    /// The statement belongs to someone else.
    #[error("Statement {0} is owned by another user")]
    Forbidden(StatementId),

    /// An update asked for a different type than the stored one.
    #[error("Conflict on statement type: stored {stored}, requested {requested}")]
    TypeConflict {
        /// The statement.
        id: StatementId,
        /// Type on record.
        stored: StatementType,
        /// Type in the update payload.
        requested: StatementType,
    },

    /// The delete matched no record, usually because a concurrent delete won.
    #[error("Unable to delete statement {0}")]
    DeleteFailed(StatementId),

    /// Storage failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(errors) => Self::Validation(errors.0),
            LedgerError::NotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::Forbidden(_) => Self::OwnershipMismatch("Unauthorized".to_string()),
            LedgerError::TypeConflict { .. } => {
                Self::TypeConflict("Conflict on statement type".to_string())
            }
            LedgerError::DeleteFailed(_) => Self::Unprocessable(err.to_string()),
            LedgerError::Store(e) => e.into(),
        }
    }
}
