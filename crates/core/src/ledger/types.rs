//! Domain types for ledger records.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::validation::{validate_amount, validate_category_name};

/// Which side of the ledger a record or category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl EntryKind {
    /// Both kinds, income first.
    pub const ALL: [Self; 2] = [Self::Income, Self::Expense];

    /// Lowercase name, as stored and serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Capitalized name for user-facing messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request to record an income or expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Income or expense.
    pub kind: EntryKind,
    /// Strictly positive amount.
    pub amount: Decimal,
    /// Category name, trimmed.
    pub category: String,
    /// Free-text description.
    pub description: String,
}

impl NewEntry {
    /// Validates the raw fields and builds an entry.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` if the amount is not positive or the category
    /// name is unusable.
    pub fn new(
        kind: EntryKind,
        amount: Decimal,
        category: &str,
        description: &str,
    ) -> Result<Self, LedgerError> {
        validate_amount(amount)?;
        let category = validate_category_name(category)?;

        Ok(Self {
            kind,
            amount,
            category: category.to_string(),
            description: description.to_string(),
        })
    }
}
