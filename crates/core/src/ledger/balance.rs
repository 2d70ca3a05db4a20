//! Net balance calculation over a user's ledger records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Income and expense totals for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Sum of all income amounts.
    pub total_income: Decimal,
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub balance: Decimal,
}

impl Balance {
    /// A balance with no records.
    pub const ZERO: Self = Self {
        total_income: Decimal::ZERO,
        total_expenses: Decimal::ZERO,
        balance: Decimal::ZERO,
    };

    /// Builds a balance from already-summed totals.
    #[must_use]
    pub fn from_totals(total_income: Decimal, total_expenses: Decimal) -> Self {
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Sums income and expense amounts. Empty sides count as zero.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::TotalOverflow` if either side no longer fits
    /// in a `Decimal`.
    pub fn from_amounts<I, E>(incomes: I, expenses: E) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = Decimal>,
        E: IntoIterator<Item = Decimal>,
    {
        Ok(Self::from_totals(checked_sum(incomes)?, checked_sum(expenses)?))
    }
}

fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, LedgerError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or(LedgerError::TotalOverflow)
}

impl Default for Balance {
    fn default() -> Self {
        Self::ZERO
    }
}
