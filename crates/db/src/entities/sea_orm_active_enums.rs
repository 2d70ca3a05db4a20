//! `SeaORM` active enums.

use budgetly_core::ledger::EntryKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category type, stored as a short string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CategoryType {
    /// Income category.
    #[sea_orm(string_value = "income")]
    Income,
    /// Expense category.
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl From<EntryKind> for CategoryType {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Income => Self::Income,
            EntryKind::Expense => Self::Expense,
        }
    }
}

impl From<CategoryType> for EntryKind {
    fn from(kind: CategoryType) -> Self {
        match kind {
            CategoryType::Income => Self::Income,
            CategoryType::Expense => Self::Expense,
        }
    }
}
