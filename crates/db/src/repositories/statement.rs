//! Statement repository for database operations.
//!
//! Updates and deletes are single conditional statements keyed by id and
//! owner, so the row count tells the engine whether its write landed.

use async_trait::async_trait;
use ledgerly_core::ledger::{Statement, StatementPatch, StatementStore, StatementType};
use ledgerly_core::store::StoreError;
use ledgerly_shared::types::{Amount, StatementId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};
use tracing::info;
use uuid::Uuid;

use super::{store_error, to_utc};
use crate::entities::statements;

fn into_statement(model: statements::Model) -> Result<Statement, StoreError> {
    let statement_type = StatementType::from_code(model.statement_type.trim()).ok_or_else(|| {
        StoreError::Backend(format!(
            "statement {} has unknown type code '{}'",
            model.id, model.statement_type
        ))
    })?;

    Ok(Statement {
        id: StatementId::from_uuid(model.id),
        description: model.description,
        value: Amount::new(model.value),
        statement_type,
        owner: model.owner,
        created_at: to_utc(model.created_at),
        updated_at: model.updated_at.map(to_utc),
    })
}

/// Statement repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct StatementRepository {
    db: DatabaseConnection,
}

impl StatementRepository {
    /// Creates a new statement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a statement row by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_model(&self, id: Uuid) -> Result<Option<statements::Model>, DbErr> {
        statements::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists statement rows of an owner, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_models(&self, owner: &str) -> Result<Vec<statements::Model>, DbErr> {
        statements::Entity::find()
            .filter(statements::Column::Owner.eq(owner))
            .order_by_asc(statements::Column::CreatedAt)
            .order_by_asc(statements::Column::Id)
            .all(&self.db)
            .await
    }
}

#[async_trait]
impl StatementStore for StatementRepository {
    async fn insert(&self, statement: &Statement) -> Result<(), StoreError> {
        statements::ActiveModel {
            id: Set(statement.id.into_inner()),
            description: Set(statement.description.clone()),
            value: Set(statement.value.value()),
            statement_type: Set(statement.statement_type.code().to_string()),
            owner: Set(statement.owner.clone()),
            created_at: Set(statement.created_at.into()),
            updated_at: Set(statement.updated_at.map(Into::into)),
        }
        .insert(&self.db)
        .await
        .map_err(store_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: StatementId) -> Result<Option<Statement>, StoreError> {
        self.find_model(id.into_inner())
            .await
            .map_err(store_error)?
            .map(into_statement)
            .transpose()
    }

    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<Statement>, StoreError> {
        self.list_models(owner)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(into_statement)
            .collect()
    }

    async fn update_fields(
        &self,
        id: StatementId,
        owner: &str,
        expected_type: StatementType,
        patch: &StatementPatch,
    ) -> Result<u64, StoreError> {
        let result = statements::Entity::update_many()
            .col_expr(
                statements::Column::Description,
                Expr::value(patch.description.clone()),
            )
            .col_expr(statements::Column::Value, Expr::value(patch.value.value()))
            .col_expr(statements::Column::UpdatedAt, Expr::value(patch.updated_at))
            .filter(statements::Column::Id.eq(id.into_inner()))
            .filter(statements::Column::Owner.eq(owner))
            .filter(statements::Column::StatementType.eq(expected_type.code()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: StatementId, owner: &str) -> Result<u64, StoreError> {
        let result = statements::Entity::delete_many()
            .filter(statements::Column::Id.eq(id.into_inner()))
            .filter(statements::Column::Owner.eq(owner))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected)
    }

    async fn close(&self) -> Result<(), StoreError> {
        info!("Closing database connection pool");
        self.db.clone().close().await.map_err(store_error)
    }
}
