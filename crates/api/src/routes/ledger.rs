//! Income and expense routes.
//!
//! Both kinds share handlers; the route decides which kind is meant.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use budgetly_core::ledger::EntryKind;
use budgetly_db::{LedgerRecord, LedgerRepository};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the income and expense routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/incomes", get(list_incomes).post(create_income))
        .route("/incomes/{id}", delete(delete_income))
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

/// Request body for creating an income or expense.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// Amount; must be greater than zero.
    pub amount: Decimal,
    /// Category name.
    pub category: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

async fn list_incomes(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<LedgerRecord>>, ApiError> {
    list_entries(&state, &user, EntryKind::Income).await
}

async fn list_expenses(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<LedgerRecord>>, ApiError> {
    list_entries(&state, &user, EntryKind::Expense).await
}

async fn create_income(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    create_entry(&state, &user, EntryKind::Income, payload).await
}

async fn create_expense(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    create_entry(&state, &user, EntryKind::Expense, payload).await
}

async fn delete_income(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    delete_entry(&state, &user, EntryKind::Income, id).await
}

async fn delete_expense(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    delete_entry(&state, &user, EntryKind::Expense, id).await
}

async fn list_entries(
    state: &AppState,
    user: &AuthUser,
    kind: EntryKind,
) -> Result<Json<Vec<LedgerRecord>>, ApiError> {
    let repo = LedgerRepository::new((*state.db).clone());
    let records = repo.list(user.user_id(), kind).await?;
    Ok(Json(records))
}

async fn create_entry(
    state: &AppState,
    user: &AuthUser,
    kind: EntryKind,
    payload: CreateEntryRequest,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let repo = LedgerRepository::new((*state.db).clone());
    let record = repo
        .create(
            user.user_id(),
            kind,
            payload.amount,
            &payload.category,
            &payload.description,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} created successfully", kind.label()),
            kind.as_str(): record,
        })),
    ))
}

async fn delete_entry(
    state: &AppState,
    user: &AuthUser,
    kind: EntryKind,
    id: Uuid,
) -> Result<Json<Value>, ApiError> {
    let repo = LedgerRepository::new((*state.db).clone());
    let record = repo.delete(user.user_id(), kind, id).await?;

    Ok(Json(json!({
        "message": format!("{} deleted successfully", kind.label()),
        kind.as_str(): record,
    })))
}
