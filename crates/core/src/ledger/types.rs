//! Statement domain types.

use chrono::{DateTime, Utc};
use ledgerly_shared::types::{Amount, StatementId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction of a statement.
///
/// Fixed at creation; an update can never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementType {
    /// Money in. Adds to the balance.
    #[serde(rename = "I")]
    Income,
    /// Money out. Subtracts from the balance.
    #[serde(rename = "O")]
    Outflow,
}

impl StatementType {
    /// Returns the single-letter wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Income => "I",
            Self::Outflow => "O",
        }
    }

    /// Parses the single-letter wire code. Case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "I" => Some(Self::Income),
            "O" => Some(Self::Outflow),
            _ => None,
        }
    }

    /// Applies this direction's sign to `amount`.
    #[must_use]
    pub fn signed(self, amount: Amount) -> Amount {
        match self {
            Self::Income => amount,
            Self::Outflow => Amount::ZERO - amount,
        }
    }
}

impl std::fmt::Display for StatementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A persisted income/outflow entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    /// Store-assigned, immutable identifier.
    pub id: StatementId,
    /// Sanitized free text.
    pub description: String,
    /// Positive amount with at most two fractional digits.
    pub value: Amount,
    /// Income or outflow.
    #[serde(rename = "type")]
    pub statement_type: StatementType,
    /// Email of the creating user; never reassigned.
    pub owner: String,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
    /// Time of the last update, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw statement payload, before validation.
///
/// Fields stay as JSON values so that a string where a number is expected is
/// reported, never coerced. Unknown fields are dropped on decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementCandidate {
    /// Expected: string.
    #[serde(default)]
    pub description: Option<Value>,
    /// Expected: number.
    #[serde(default)]
    pub value: Option<Value>,
    /// Expected: `"I"` or `"O"`.
    #[serde(default, rename = "type")]
    pub statement_type: Option<Value>,
}

/// A statement payload that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidStatement {
    /// Sanitized, non-empty, length-bounded description.
    pub description: String,
    /// Positive, two-digit, below the ceiling.
    pub value: Amount,
    /// Requested direction.
    pub statement_type: StatementType,
}

/// Fields an update may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementPatch {
    /// New description.
    pub description: String,
    /// New value.
    pub value: Amount,
    /// Time of this update.
    pub updated_at: DateTime<Utc>,
}

impl Statement {
    /// Returns a copy with `patch` applied. Type and owner are untouched.
    #[must_use]
    pub fn patched(&self, patch: &StatementPatch) -> Self {
        Self {
            description: patch.description.clone(),
            value: patch.value,
            updated_at: Some(patch.updated_at),
            ..self.clone()
        }
    }
}
