//! Ledger repository for incomes and expenses.
//!
//! Incomes and expenses live in separate tables with the same shape. Every
//! operation takes the caller's user id; lookups match on `id` and `user_id`
//! together, so a record owned by another user reads as not found.

use budgetly_core::ledger::{Balance, EntryKind, LedgerError, NewEntry};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::category;
use crate::entities::{categories, expenses, incomes};

/// Error types for ledger store operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerStoreError {
    /// Record does not exist or belongs to another user.
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    /// Invalid record input.
    #[error(transparent)]
    Invalid(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// An income or expense as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRecord {
    /// Record ID.
    pub id: Uuid,
    /// Income or expense.
    #[serde(skip)]
    pub kind: EntryKind,
    /// Positive amount.
    pub amount: Decimal,
    /// Category name.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Insert time (UTC).
    #[serde(rename = "date_time")]
    pub created_at: DateTime<Utc>,
}

/// Columns shared by both ledger tables.
struct EntryRow {
    id: Uuid,
    amount: Decimal,
    description: String,
    created_at: DateTime<Utc>,
}

impl From<incomes::Model> for EntryRow {
    fn from(m: incomes::Model) -> Self {
        Self {
            id: m.id,
            amount: m.amount,
            description: m.description,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

impl From<expenses::Model> for EntryRow {
    fn from(m: expenses::Model) -> Self {
        Self {
            id: m.id,
            amount: m.amount,
            description: m.description,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

impl LedgerRecord {
    fn from_row(kind: EntryKind, row: EntryRow, category: Option<categories::Model>) -> Self {
        Self {
            id: row.id,
            kind,
            amount: row.amount,
            category: category.map(|c| c.name).unwrap_or_default(),
            description: row.description,
            created_at: row.created_at,
        }
    }
}

/// Ledger repository enforcing per-user ownership.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an income or expense for the user.
    ///
    /// The amount is validated before any query runs. The category is looked
    /// up by name within the user's categories of the same type and created
    /// on first use.
    ///
    /// # Errors
    ///
    /// Returns `LedgerStoreError::Invalid` for a non-positive amount or bad
    /// category name.
    pub async fn create(
        &self,
        user_id: Uuid,
        kind: EntryKind,
        amount: Decimal,
        category: &str,
        description: &str,
    ) -> Result<LedgerRecord, LedgerStoreError> {
        let entry = NewEntry::new(kind, amount, category, description)?;

        let txn = self.db.begin().await?;
        let category = category::find_or_create(&txn, user_id, &entry.category, kind).await?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let row: EntryRow = match kind {
            EntryKind::Income => incomes::ActiveModel {
                id: Set(id),
                user_id: Set(user_id),
                category_id: Set(category.id),
                amount: Set(entry.amount),
                description: Set(entry.description),
                created_at: Set(now.into()),
            }
            .insert(&txn)
            .await?
            .into(),
            EntryKind::Expense => expenses::ActiveModel {
                id: Set(id),
                user_id: Set(user_id),
                category_id: Set(category.id),
                amount: Set(entry.amount),
                description: Set(entry.description),
                created_at: Set(now.into()),
            }
            .insert(&txn)
            .await?
            .into(),
        };
        txn.commit().await?;

        info!(user_id = %user_id, record_id = %id, kind = %kind, "Ledger record created");
        Ok(LedgerRecord::from_row(kind, row, Some(category)))
    }

    /// Lists the user's records of one kind, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        user_id: Uuid,
        kind: EntryKind,
    ) -> Result<Vec<LedgerRecord>, LedgerStoreError> {
        let rows: Vec<(EntryRow, Option<categories::Model>)> = match kind {
            EntryKind::Income => incomes::Entity::find()
                .filter(incomes::Column::UserId.eq(user_id))
                .order_by_desc(incomes::Column::CreatedAt)
                .find_also_related(categories::Entity)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|(m, c)| (m.into(), c))
                .collect(),
            EntryKind::Expense => expenses::Entity::find()
                .filter(expenses::Column::UserId.eq(user_id))
                .order_by_desc(expenses::Column::CreatedAt)
                .find_also_related(categories::Entity)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|(m, c)| (m.into(), c))
                .collect(),
        };

        Ok(rows
            .into_iter()
            .map(|(row, category)| LedgerRecord::from_row(kind, row, category))
            .collect())
    }

    /// Fetches one of the user's records.
    ///
    /// # Errors
    ///
    /// Returns `LedgerStoreError::NotFound` if the record does not exist or
    /// is owned by another user.
    pub async fn get(
        &self,
        user_id: Uuid,
        kind: EntryKind,
        id: Uuid,
    ) -> Result<LedgerRecord, LedgerStoreError> {
        let found: Option<(EntryRow, Option<categories::Model>)> = match kind {
            EntryKind::Income => incomes::Entity::find_by_id(id)
                .filter(incomes::Column::UserId.eq(user_id))
                .find_also_related(categories::Entity)
                .one(&self.db)
                .await?
                .map(|(m, c)| (m.into(), c)),
            EntryKind::Expense => expenses::Entity::find_by_id(id)
                .filter(expenses::Column::UserId.eq(user_id))
                .find_also_related(categories::Entity)
                .one(&self.db)
                .await?
                .map(|(m, c)| (m.into(), c)),
        };

        found
            .map(|(row, category)| LedgerRecord::from_row(kind, row, category))
            .ok_or(LedgerStoreError::NotFound(id))
    }

    /// Deletes one of the user's records and returns it.
    ///
    /// # Errors
    ///
    /// Returns `LedgerStoreError::NotFound` both when the record does not
    /// exist and when it belongs to another user.
    pub async fn delete(
        &self,
        user_id: Uuid,
        kind: EntryKind,
        id: Uuid,
    ) -> Result<LedgerRecord, LedgerStoreError> {
        let record = self.get(user_id, kind, id).await?;

        let deleted = match kind {
            EntryKind::Income => {
                incomes::Entity::delete_many()
                    .filter(incomes::Column::Id.eq(id))
                    .filter(incomes::Column::UserId.eq(user_id))
                    .exec(&self.db)
                    .await?
            }
            EntryKind::Expense => {
                expenses::Entity::delete_many()
                    .filter(expenses::Column::Id.eq(id))
                    .filter(expenses::Column::UserId.eq(user_id))
                    .exec(&self.db)
                    .await?
            }
        };
        if deleted.rows_affected == 0 {
            // Removed between the lookup and the delete.
            return Err(LedgerStoreError::NotFound(id));
        }

        info!(user_id = %user_id, record_id = %id, kind = %kind, "Ledger record deleted");
        Ok(record)
    }

    /// Returns the user's income and expense totals and their difference.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn balance(&self, user_id: Uuid) -> Result<Balance, LedgerStoreError> {
        let income_amounts: Vec<Decimal> = incomes::Entity::find()
            .select_only()
            .column(incomes::Column::Amount)
            .filter(incomes::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await?;

        let expense_amounts: Vec<Decimal> = expenses::Entity::find()
            .select_only()
            .column(expenses::Column::Amount)
            .filter(expenses::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(Balance::from_amounts(income_amounts, expense_amounts)?)
    }
}
