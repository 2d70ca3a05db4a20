//! Integration tests for the ledger store and balance.

mod common;

use budgetly_core::ledger::{Balance, EntryKind, LedgerError};
use budgetly_db::{CategoryRepository, LedgerRepository, LedgerStoreError, UserRepository};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_list_income() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;
    let repo = LedgerRepository::new(db.clone());

    let record = repo
        .create(user.id, EntryKind::Income, dec!(1500.50), "Salary", "June pay")
        .await
        .expect("Failed to create income");

    assert_eq!(record.kind, EntryKind::Income);
    assert_eq!(record.amount, dec!(1500.50));
    assert_eq!(record.category, "Salary");
    assert_eq!(record.description, "June pay");

    let listed = repo.list(user.id, EntryKind::Income).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, record.id);
    assert_eq!(listed[0].category, "Salary");
    assert_eq!(listed[0].amount, dec!(1500.50));

    // Kinds are kept apart
    assert!(repo.list(user.id, EntryKind::Expense).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_positive_amount_rejected() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;
    let repo = LedgerRepository::new(db.clone());

    for kind in EntryKind::ALL {
        let zero = repo.create(user.id, kind, Decimal::ZERO, "Misc", "").await;
        assert!(matches!(
            zero,
            Err(LedgerStoreError::Invalid(LedgerError::ZeroAmount))
        ));

        let negative = repo.create(user.id, kind, dec!(-5), "Misc", "").await;
        assert!(matches!(
            negative,
            Err(LedgerStoreError::Invalid(LedgerError::NegativeAmount))
        ));

        assert!(repo.list(user.id, kind).await.unwrap().is_empty());
    }

    // Nothing was written, not even the category.
    let categories = CategoryRepository::new(db.clone())
        .list(user.id, None)
        .await
        .unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_amount_must_fit_the_amount_column() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;
    let repo = LedgerRepository::new(db.clone());

    let too_precise = repo
        .create(user.id, EntryKind::Income, dec!(0.001), "Misc", "")
        .await;
    assert!(matches!(
        too_precise,
        Err(LedgerStoreError::Invalid(LedgerError::TooManyDecimals { max: 2 }))
    ));

    for _ in 0..2 {
        let huge = repo
            .create(
                user.id,
                EntryKind::Income,
                dec!(70000000000000000000000000000),
                "Misc",
                "",
            )
            .await;
        assert!(matches!(
            huge,
            Err(LedgerStoreError::Invalid(LedgerError::AmountTooLarge { .. }))
        ));
    }

    assert!(repo.list(user.id, EntryKind::Income).await.unwrap().is_empty());
    assert_eq!(repo.balance(user.id).await.unwrap(), Balance::ZERO);
}

#[tokio::test]
async fn test_list_is_scoped_to_owner() {
    let db = common::setup_db().await;
    let alice = common::create_user(&db, "alice").await;
    let bob = common::create_user(&db, "bob").await;
    let repo = LedgerRepository::new(db.clone());

    repo.create(alice.id, EntryKind::Expense, dec!(20), "Food", "lunch")
        .await
        .unwrap();
    repo.create(bob.id, EntryKind::Expense, dec!(99), "Food", "dinner")
        .await
        .unwrap();

    let alice_expenses = repo.list(alice.id, EntryKind::Expense).await.unwrap();
    assert_eq!(alice_expenses.len(), 1);
    assert_eq!(alice_expenses[0].description, "lunch");
}

#[tokio::test]
async fn test_delete_own_record() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;
    let repo = LedgerRepository::new(db.clone());

    let record = repo
        .create(user.id, EntryKind::Expense, dec!(12.25), "Transport", "bus")
        .await
        .unwrap();

    let deleted = repo
        .delete(user.id, EntryKind::Expense, record.id)
        .await
        .expect("Owner should be able to delete");
    assert_eq!(deleted.id, record.id);
    assert_eq!(deleted.category, "Transport");

    assert!(repo.list(user.id, EntryKind::Expense).await.unwrap().is_empty());

    let again = repo.delete(user.id, EntryKind::Expense, record.id).await;
    assert!(matches!(again, Err(LedgerStoreError::NotFound(id)) if id == record.id));
}

#[tokio::test]
async fn test_delete_other_users_record_is_not_found() {
    let db = common::setup_db().await;
    let alice = common::create_user(&db, "alice").await;
    let mallory = common::create_user(&db, "mallory").await;
    let repo = LedgerRepository::new(db.clone());

    let record = repo
        .create(alice.id, EntryKind::Income, dec!(300), "Gift", "birthday")
        .await
        .unwrap();

    let foreign = repo.delete(mallory.id, EntryKind::Income, record.id).await;
    let missing = repo
        .delete(mallory.id, EntryKind::Income, Uuid::new_v4())
        .await;

    assert!(matches!(foreign, Err(LedgerStoreError::NotFound(_))));
    assert!(matches!(missing, Err(LedgerStoreError::NotFound(_))));

    // Alice's record is untouched
    let still_there = repo.get(alice.id, EntryKind::Income, record.id).await.unwrap();
    assert_eq!(still_there.amount, dec!(300));
}

#[tokio::test]
async fn test_delete_with_wrong_kind_is_not_found() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;
    let repo = LedgerRepository::new(db.clone());

    let income = repo
        .create(user.id, EntryKind::Income, dec!(10), "Salary", "")
        .await
        .unwrap();

    let result = repo.delete(user.id, EntryKind::Expense, income.id).await;

    assert!(matches!(result, Err(LedgerStoreError::NotFound(_))));
}

#[tokio::test]
async fn test_category_is_reused_per_kind() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;
    let repo = LedgerRepository::new(db.clone());

    repo.create(user.id, EntryKind::Expense, dec!(5), "Food", "coffee")
        .await
        .unwrap();
    repo.create(user.id, EntryKind::Expense, dec!(7), " Food ", "bagel")
        .await
        .unwrap();
    repo.create(user.id, EntryKind::Income, dec!(40), "Food", "catering gig")
        .await
        .unwrap();

    let categories = CategoryRepository::new(db.clone());
    assert_eq!(
        categories.list(user.id, Some(EntryKind::Expense)).await.unwrap().len(),
        1
    );
    assert_eq!(
        categories.list(user.id, Some(EntryKind::Income)).await.unwrap().len(),
        1
    );
    assert_eq!(categories.list(user.id, None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_balance_empty_is_zero() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;

    let balance = LedgerRepository::new(db.clone())
        .balance(user.id)
        .await
        .unwrap();

    assert_eq!(balance, Balance::ZERO);
}

#[tokio::test]
async fn test_balance_is_income_minus_expenses_for_user_only() {
    let db = common::setup_db().await;
    let alice = common::create_user(&db, "alice").await;
    let bob = common::create_user(&db, "bob").await;
    let repo = LedgerRepository::new(db.clone());

    repo.create(alice.id, EntryKind::Income, dec!(1500), "Salary", "")
        .await
        .unwrap();
    repo.create(alice.id, EntryKind::Income, dec!(20.25), "Gift", "")
        .await
        .unwrap();
    repo.create(alice.id, EntryKind::Expense, dec!(49.75), "Food", "")
        .await
        .unwrap();
    repo.create(bob.id, EntryKind::Income, dec!(1000000), "Lottery", "")
        .await
        .unwrap();
    repo.create(bob.id, EntryKind::Expense, dec!(0.5), "Food", "")
        .await
        .unwrap();

    let balance = repo.balance(alice.id).await.unwrap();

    assert_eq!(balance.total_income, dec!(1520.25));
    assert_eq!(balance.total_expenses, dec!(49.75));
    assert_eq!(balance.balance, dec!(1470.50));

    let bob_balance = repo.balance(bob.id).await.unwrap();
    assert_eq!(bob_balance.balance, dec!(999999.5));
}

#[tokio::test]
async fn test_deleting_user_removes_their_records() {
    let db = common::setup_db().await;
    let user = common::create_user(&db, "alice").await;
    let repo = LedgerRepository::new(db.clone());
    repo.create(user.id, EntryKind::Income, dec!(10), "Salary", "")
        .await
        .unwrap();

    UserRepository::new(db.clone()).delete(user.id).await.unwrap();

    assert!(repo.list(user.id, EntryKind::Income).await.unwrap().is_empty());
    assert_eq!(repo.balance(user.id).await.unwrap(), Balance::ZERO);
}
