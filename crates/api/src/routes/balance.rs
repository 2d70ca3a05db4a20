//! Balance endpoint.

use axum::{Json, Router, extract::State, routing::get};
use budgetly_core::ledger::Balance;
use budgetly_db::LedgerRepository;

use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the balance route (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/balance", get(get_balance))
}

/// GET /balance - Income and expense totals for the caller.
async fn get_balance(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Balance>, ApiError> {
    let repo = LedgerRepository::new((*state.db).clone());
    let balance = repo.balance(user.user_id()).await?;
    Ok(Json(balance))
}
