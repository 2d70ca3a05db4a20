//! Ledger error types for validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when validating ledger input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Entry amount cannot be zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// Entry amount cannot be negative.
    #[error("amount must be greater than zero")]
    NegativeAmount,

    /// Entry amount has more decimal places than the ledger stores.
    #[error("amount must have at most {max} decimal places")]
    TooManyDecimals {
        /// Maximum accepted scale.
        max: u32,
    },

    /// Entry amount exceeds the largest storable value.
    #[error("amount must be at most {max}")]
    AmountTooLarge {
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Category name is empty.
    #[error("category must not be empty")]
    EmptyCategory,

    /// Category name is too long.
    #[error("category must be at most {max} characters")]
    CategoryTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// A running total no longer fits in a `Decimal`.
    #[error("total overflowed")]
    TotalOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LedgerError::NegativeAmount.to_string(),
            "amount must be greater than zero"
        );
        assert_eq!(
            LedgerError::TooManyDecimals { max: 2 }.to_string(),
            "amount must have at most 2 decimal places"
        );
        assert_eq!(
            LedgerError::CategoryTooLong { max: 100 }.to_string(),
            "category must be at most 100 characters"
        );
    }
}
