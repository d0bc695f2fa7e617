//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Each one also implements the matching storage port from `ledgerly-core`.

pub mod account;
pub mod session;
pub mod statement;
pub mod user;

pub use account::AccountRepository;
pub use session::SessionRepository;
pub use statement::StatementRepository;
pub use user::UserRepository;

use chrono::{DateTime, Utc};
use ledgerly_core::store::StoreError;
use sea_orm::{DbErr, SqlErr, prelude::DateTimeWithTimeZone};

/// Maps a `SeaORM` error onto the storage port error.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Duplicate(detail),
        _ => StoreError::Backend(err.to_string()),
    }
}

pub(crate) fn to_utc(ts: DateTimeWithTimeZone) -> DateTime<Utc> {
    ts.with_timezone(&Utc)
}
