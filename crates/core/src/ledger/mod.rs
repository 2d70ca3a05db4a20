//! Income/expense bookkeeping rules.
//!
//! This module implements the ledger logic that needs no storage:
//! - Entry kinds and validated entry input
//! - Business rule validation
//! - Balance calculation
//! - Error types for ledger input

pub mod balance;
pub mod error;
pub mod types;
pub mod validation;

pub use balance::Balance;
pub use error::LedgerError;
pub use types::{EntryKind, NewEntry};
pub use validation::{
    AMOUNT_SCALE, MAX_AMOUNT, MAX_CATEGORY_LEN, validate_amount, validate_category_name,
};
