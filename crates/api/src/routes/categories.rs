//! Category routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use budgetly_core::ledger::EntryKind;
use budgetly_db::{CategoryRepository, entities::categories};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the category routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
}

/// Query parameters for listing categories.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    /// Only categories of this type.
    #[serde(rename = "type")]
    pub kind: Option<EntryKind>,
}

/// Request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name, unique per user and type.
    pub name: String,
    /// Whether the category is for incomes or expenses.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Category as returned to clients.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    /// Category ID.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Category type.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl From<categories::Model> for CategoryResponse {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind.into(),
        }
    }
}

/// GET /categories - The caller's categories, by name.
async fn list_categories(
    State(state): State<AppState>,
    user: AuthUser,
    Query(filter): Query<CategoryFilter>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let repo = CategoryRepository::new((*state.db).clone());
    let categories = repo.list(user.user_id(), filter.kind).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// POST /categories - Create a category ahead of first use.
async fn create_category(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = CategoryRepository::new((*state.db).clone());
    let category = repo
        .create(user.user_id(), &payload.name, payload.kind)
        .await?;

    info!(user_id = %user.user_id(), category_id = %category.id, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Category created successfully",
            "category": CategoryResponse::from(category),
        })),
    ))
}

/// DELETE /categories/{id} - Remove an unused category.
async fn delete_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = CategoryRepository::new((*state.db).clone());
    let category = repo.delete(user.user_id(), id).await?;

    info!(user_id = %user.user_id(), category_id = %id, "Category deleted");

    Ok(Json(json!({
        "message": "Category deleted successfully",
        "category": CategoryResponse::from(category),
    })))
}
