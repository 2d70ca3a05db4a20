//! Business rule validation for ledger input.

use rust_decimal::Decimal;

use super::error::LedgerError;

/// Longest accepted category name, in characters.
pub const MAX_CATEGORY_LEN: usize = 100;

/// Decimal places stored for an amount (`DECIMAL(16, 2)`).
pub const AMOUNT_SCALE: u32 = 2;

/// Largest amount a `DECIMAL(16, 2)` column holds: `99_999_999_999_999.99`.
pub const MAX_AMOUNT: Decimal =
    Decimal::from_parts(0x6FC0_FFFF, 0x0023_86F2, 0, false, AMOUNT_SCALE);

/// Validates that an amount is strictly positive and fits the amount column.
///
/// Trailing zeros do not count towards the scale, so `10.500` is accepted.
///
/// # Errors
///
/// Returns `LedgerError::ZeroAmount`, `LedgerError::NegativeAmount`,
/// `LedgerError::TooManyDecimals` or `LedgerError::AmountTooLarge`.
pub fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount.is_zero() {
        return Err(LedgerError::ZeroAmount);
    }
    if amount.is_sign_negative() {
        return Err(LedgerError::NegativeAmount);
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(LedgerError::TooManyDecimals { max: AMOUNT_SCALE });
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::AmountTooLarge { max: MAX_AMOUNT });
    }
    Ok(())
}

/// Validates a category name and returns it trimmed.
///
/// # Errors
///
/// Returns `LedgerError::EmptyCategory` or `LedgerError::CategoryTooLong`.
pub fn validate_category_name(name: &str) -> Result<&str, LedgerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::EmptyCategory);
    }
    if name.chars().count() > MAX_CATEGORY_LEN {
        return Err(LedgerError::CategoryTooLong {
            max: MAX_CATEGORY_LEN,
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(dec!(0.01))]
    #[case(dec!(1))]
    #[case(dec!(1500.75))]
    fn test_positive_amount_accepted(#[case] amount: Decimal) {
        assert_eq!(validate_amount(amount), Ok(()));
    }

    #[rstest]
    #[case(dec!(0), LedgerError::ZeroAmount)]
    #[case(dec!(0.00), LedgerError::ZeroAmount)]
    #[case(dec!(-0.01), LedgerError::NegativeAmount)]
    #[case(dec!(-250), LedgerError::NegativeAmount)]
    fn test_non_positive_amount_rejected(#[case] amount: Decimal, #[case] expected: LedgerError) {
        assert_eq!(validate_amount(amount), Err(expected));
    }

    #[test]
    fn test_max_amount_value() {
        assert_eq!(MAX_AMOUNT, dec!(99999999999999.99));
    }

    #[rstest]
    #[case(dec!(10.500))]
    #[case(dec!(0.10))]
    #[case(dec!(99999999999999.99))]
    fn test_amount_at_column_limits_accepted(#[case] amount: Decimal) {
        assert_eq!(validate_amount(amount), Ok(()));
    }

    #[rstest]
    #[case(dec!(0.001))]
    #[case(dec!(10.005))]
    #[case(dec!(1.123456789))]
    fn test_amount_with_extra_decimals_rejected(#[case] amount: Decimal) {
        assert_eq!(
            validate_amount(amount),
            Err(LedgerError::TooManyDecimals { max: AMOUNT_SCALE })
        );
    }

    #[rstest]
    #[case(dec!(100000000000000))]
    #[case(dec!(70000000000000000000000000000))]
    fn test_amount_above_column_limit_rejected(#[case] amount: Decimal) {
        assert_eq!(
            validate_amount(amount),
            Err(LedgerError::AmountTooLarge { max: MAX_AMOUNT })
        );
    }

    #[test]
    fn test_category_name() {
        assert_eq!(validate_category_name(" Rent "), Ok("Rent"));
        assert_eq!(validate_category_name("  "), Err(LedgerError::EmptyCategory));
        assert!(validate_category_name(&"x".repeat(MAX_CATEGORY_LEN)).is_ok());
        assert_eq!(
            validate_category_name(&"x".repeat(MAX_CATEGORY_LEN + 1)),
            Err(LedgerError::CategoryTooLong {
                max: MAX_CATEGORY_LEN
            })
        );
    }
}
