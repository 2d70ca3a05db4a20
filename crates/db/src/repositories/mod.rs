//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Every ledger and category operation takes the caller's user id and filters
//! on it; a row owned by someone else is indistinguishable from a missing one.

pub mod category;
pub mod ledger;
pub mod user;

pub use category::{CategoryError, CategoryRepository};
pub use ledger::{LedgerRecord, LedgerRepository, LedgerStoreError};
pub use user::{UserError, UserRepository};
