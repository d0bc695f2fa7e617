//! Session repository for database operations.
//!
//! Tokens are stored as issued and looked up by exact match. Sessions never
//! expire and nothing here revokes them.

use ledgerly_core::auth::SessionRecord;
use ledgerly_shared::types::{SessionId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use super::to_utc;
use crate::entities::sessions;

impl From<sessions::Model> for SessionRecord {
    fn from(model: sessions::Model) -> Self {
        Self {
            id: SessionId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            token: model.token,
            created_at: to_utc(model.created_at),
        }
    }
}

/// Session repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    /// Creates a new session repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, session: &SessionRecord) -> Result<sessions::Model, DbErr> {
        sessions::ActiveModel {
            id: Set(session.id.into_inner()),
            user_id: Set(session.user_id.into_inner()),
            token: Set(session.token.clone()),
            created_at: Set(session.created_at.into()),
        }
        .insert(&self.db)
        .await
    }

    /// Finds a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<sessions::Model>, DbErr> {
        sessions::Entity::find()
            .filter(sessions::Column::Token.eq(token))
            .one(&self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn test_model_into_record_normalizes_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let model = sessions::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token: "0b9c5a2e-4f6d-4e8a-9f1b-2c3d4e5f6a7b".into(),
            created_at: local,
        };

        let record = SessionRecord::from(model);

        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
        );
        assert_eq!(record.token, "0b9c5a2e-4f6d-4e8a-9f1b-2c3d4e5f6a7b");
    }
}
