//! `SeaORM` entity prelude.

pub use super::categories::Entity as Categories;
pub use super::expenses::Entity as Expenses;
pub use super::incomes::Entity as Incomes;
pub use super::users::Entity as Users;
