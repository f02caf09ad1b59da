//! Transaction repository for database operations.
//!
//! Every operation is scoped to the owning user; a transaction is never
//! visible to or mutable by anyone else.

use fintrack_core::summary::TransactionRecord;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::TransactionKind, transactions};

/// Input for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Owning user.
    pub user_id: Uuid,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Free-text category label.
    pub category: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Optional description.
    pub description: Option<String>,
    /// Caller-supplied transaction date.
    pub occurred_at: chrono::DateTime<chrono::FixedOffset>,
}

/// Fields changed by a transaction update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TransactionChanges {
    /// New kind.
    pub kind: Option<TransactionKind>,
    /// New category.
    pub category: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// New transaction date.
    pub occurred_at: Option<chrono::DateTime<chrono::FixedOffset>>,
}

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: Arc<DatabaseConnection>,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists a user's transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<transactions::Model>, DbErr> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .order_by_desc(transactions::Column::OccurredAt)
            .all(self.db.as_ref())
            .await
    }

    /// Lists a user's transactions as core records, newest first.
    ///
    /// This is the snapshot consumed by aggregation and export.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn history_for_user(&self, user_id: Uuid) -> Result<Vec<TransactionRecord>, DbErr> {
        let models = self.list_by_user(user_id).await?;
        Ok(models.into_iter().map(TransactionRecord::from).collect())
    }

    /// Creates a new transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateTransactionInput,
    ) -> Result<transactions::Model, DbErr> {
        let transaction = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(input.user_id),
            kind: Set(input.kind),
            category: Set(input.category),
            amount: Set(input.amount),
            description: Set(input.description),
            occurred_at: Set(input.occurred_at),
            created_at: Set(chrono::Utc::now().into()),
        };

        transaction.insert(self.db.as_ref()).await
    }

    /// Finds a transaction owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_for_user(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<Option<transactions::Model>, DbErr> {
        transactions::Entity::find_by_id(transaction_id)
            .filter(transactions::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
    }

    /// Applies changes to a transaction owned by the given user. Returns
    /// `None` when no matching transaction exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
        changes: TransactionChanges,
    ) -> Result<Option<transactions::Model>, DbErr> {
        let Some(transaction) = self.find_for_user(user_id, transaction_id).await? else {
            return Ok(None);
        };

        let mut active: transactions::ActiveModel = transaction.into();
        if let Some(kind) = changes.kind {
            active.kind = Set(kind);
        }
        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(occurred_at) = changes.occurred_at {
            active.occurred_at = Set(occurred_at);
        }

        active.update(self.db.as_ref()).await.map(Some)
    }

    /// Deletes a transaction owned by the given user. Returns `false` when
    /// no matching transaction existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_for_user(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<bool, DbErr> {
        let Some(transaction) = self.find_for_user(user_id, transaction_id).await? else {
            return Ok(false);
        };

        transaction.delete(self.db.as_ref()).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use fintrack_core::summary::TransactionKind as CoreKind;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    use super::*;

    fn sample_transaction(kind: TransactionKind, amount: Decimal) -> transactions::Model {
        transactions::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind,
            category: "Food".to_string(),
            amount,
            description: Some("lunch".to_string()),
            occurred_at: chrono::Utc::now().into(),
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_history_maps_models_to_core_records() {
        let expense = sample_transaction(TransactionKind::Expense, dec!(12.50));
        let income = sample_transaction(TransactionKind::Income, dec!(100));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expense.clone(), income.clone()]])
            .into_connection();

        let repo = TransactionRepository::new(Arc::new(db));
        let history = repo.history_for_user(expense.user_id).await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, expense.id);
        assert_eq!(history[0].kind, CoreKind::Expense);
        assert_eq!(history[0].amount, dec!(12.50));
        assert_eq!(history[0].description.as_deref(), Some("lunch"));
        assert_eq!(history[1].kind, CoreKind::Income);
    }

    #[tokio::test]
    async fn test_delete_missing_transaction_returns_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<transactions::Model>::new()])
            .into_connection();

        let repo = TransactionRepository::new(Arc::new(db));
        let deleted = repo
            .delete_for_user(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_existing_transaction() {
        let transaction = sample_transaction(TransactionKind::Expense, dec!(5));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![transaction.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = TransactionRepository::new(Arc::new(db));
        let deleted = repo
            .delete_for_user(transaction.user_id, transaction.id)
            .await
            .unwrap();

        assert!(deleted);
    }
}
