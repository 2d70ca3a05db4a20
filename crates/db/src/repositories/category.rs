//! Category repository for per-user income and expense categories.

use budgetly_core::ledger::{EntryKind, LedgerError, validate_category_name};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use super::user::is_unique_violation;
use crate::entities::{categories, expenses, incomes, sea_orm_active_enums::CategoryType};

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Category does not exist or belongs to another user.
    #[error("Category not found: {0}")]
    NotFound(Uuid),

    /// A category with this name and type already exists for the user.
    #[error("Category already exists: {0}")]
    Duplicate(String),

    /// Category is still referenced by ledger records.
    #[error("Category {0} is still used by records")]
    InUse(Uuid),

    /// Invalid category input.
    #[error(transparent)]
    Invalid(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Category repository, scoped by owner on every call.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's categories, optionally of one type, by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        user_id: Uuid,
        kind: Option<EntryKind>,
    ) -> Result<Vec<categories::Model>, DbErr> {
        let mut query = categories::Entity::find().filter(categories::Column::UserId.eq(user_id));
        if let Some(kind) = kind {
            query = query.filter(categories::Column::Kind.eq(CategoryType::from(kind)));
        }

        query
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
    }

    /// Finds one of the user's categories.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::NotFound` if it does not exist for this user.
    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<categories::Model, CategoryError> {
        find_owned(&self.db, user_id, id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Invalid` for a bad name and
    /// `CategoryError::Duplicate` if the user already has it.
    pub async fn create(
        &self,
        user_id: Uuid,
        name: &str,
        kind: EntryKind,
    ) -> Result<categories::Model, CategoryError> {
        let name = validate_category_name(name)?;

        if find_by_name(&self.db, user_id, name, kind).await?.is_some() {
            return Err(CategoryError::Duplicate(name.to_string()));
        }

        insert(&self.db, user_id, name, kind).await.map_err(|e| {
            if is_unique_violation(&e) {
                CategoryError::Duplicate(name.to_string())
            } else {
                CategoryError::Database(e)
            }
        })
    }

    /// Deletes one of the user's categories.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::NotFound` if it does not exist for this user
    /// and `CategoryError::InUse` if records still point at it.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<categories::Model, CategoryError> {
        let category = self.find(user_id, id).await?;

        let in_use = match EntryKind::from(category.kind) {
            EntryKind::Income => {
                incomes::Entity::find()
                    .filter(incomes::Column::CategoryId.eq(id))
                    .count(&self.db)
                    .await?
            }
            EntryKind::Expense => {
                expenses::Entity::find()
                    .filter(expenses::Column::CategoryId.eq(id))
                    .count(&self.db)
                    .await?
            }
        };
        if in_use > 0 {
            return Err(CategoryError::InUse(id));
        }

        category.clone().delete(&self.db).await?;
        info!(user_id = %user_id, category_id = %id, "Category deleted");

        Ok(category)
    }
}

/// Returns the user's category with this name and type, creating it if absent.
pub(crate) async fn find_or_create<C>(
    conn: &C,
    user_id: Uuid,
    name: &str,
    kind: EntryKind,
) -> Result<categories::Model, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    if let Some(existing) = find_by_name(conn, user_id, name, kind).await? {
        return Ok(existing);
    }

    insert_or_fetch(conn, user_id, name, kind).await
}

/// Inserts the category, or returns the row a concurrent insert just created.
///
/// The insert runs in its own savepoint so a unique violation leaves any
/// enclosing transaction usable for the re-select.
async fn insert_or_fetch<C>(
    conn: &C,
    user_id: Uuid,
    name: &str,
    kind: EntryKind,
) -> Result<categories::Model, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let savepoint = conn.begin().await?;
    match insert(&savepoint, user_id, name, kind).await {
        Ok(created) => {
            savepoint.commit().await?;
            info!(user_id = %user_id, category_id = %created.id, kind = %kind, "Category created on first use");
            Ok(created)
        }
        Err(e) if is_unique_violation(&e) => {
            savepoint.rollback().await?;
            find_by_name(conn, user_id, name, kind).await?.ok_or(e)
        }
        Err(e) => Err(e),
    }
}

async fn find_owned<C>(conn: &C, user_id: Uuid, id: Uuid) -> Result<Option<categories::Model>, DbErr>
where
    C: ConnectionTrait,
{
    categories::Entity::find_by_id(id)
        .filter(categories::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

async fn find_by_name<C>(
    conn: &C,
    user_id: Uuid,
    name: &str,
    kind: EntryKind,
) -> Result<Option<categories::Model>, DbErr>
where
    C: ConnectionTrait,
{
    categories::Entity::find()
        .filter(categories::Column::UserId.eq(user_id))
        .filter(categories::Column::Name.eq(name))
        .filter(categories::Column::Kind.eq(CategoryType::from(kind)))
        .one(conn)
        .await
}

async fn insert<C>(
    conn: &C,
    user_id: Uuid,
    name: &str,
    kind: EntryKind,
) -> Result<categories::Model, DbErr>
where
    C: ConnectionTrait,
{
    categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(name.to_string()),
        kind: Set(kind.into()),
        created_at: Set(chrono::Utc::now().into()),
    }
    .insert(conn)
    .await
}
