//! Authentication routes for register, login, and logout.

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use budgetly_core::auth::validate_credentials;
use budgetly_db::{UserError, UserRepository};
use budgetly_shared::auth::{LoginForm, LoginResponse, RegisterRequest, RegisterResponse, UserInfo};
use serde_json::json;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::AuthUser};

const BAD_LOGIN: &str = "Incorrect username or password";

/// Creates the public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Creates the auth routes that need a bearer token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/logout", post(logout))
}

/// POST /register - Register a new user.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = validate_credentials(&payload.username, &payload.password)?;
    let password_hash = state.credentials.set_password(&payload.password)?;
    let user = UserRepository::new((*state.db).clone())
        .create(username, &password_hash)
        .await
        .inspect_err(|e| {
            if matches!(e, UserError::UsernameTaken(_)) {
                info!(username = %username, "Registration for existing username");
            }
        })?;

    info!(user_id = %user.id, "User registered");

    let response = RegisterResponse {
        user: UserInfo {
            id: user.id,
            username: user.username,
        },
        message: "User registered successfully".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /login - OAuth2 password grant; returns a bearer token.
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<LoginResponse>, ApiError> {
    if form
        .grant_type
        .as_deref()
        .is_some_and(|grant_type| grant_type != "password")
    {
        return Err(ApiError::validation("Unsupported grant_type"));
    }

    let user_repo = UserRepository::new((*state.db).clone());

    let Some(user) = user_repo.find_by_username(form.username.trim()).await? else {
        info!(username = %form.username, "Login attempt for non-existent user");
        return Err(ApiError::unauthorized(BAD_LOGIN));
    };

    if !state
        .credentials
        .verify_password(&form.password, &user.password_hash)
    {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(ApiError::unauthorized(BAD_LOGIN));
    }

    let access_token = state.token_service.issue(&user.username)?;

    info!(user_id = %user.id, "User logged in successfully");

    Ok(Json(LoginResponse::bearer(
        access_token,
        state.token_service.expires_in(),
    )))
}

/// POST /logout - Tokens are stateless, so there is nothing to revoke.
async fn logout(user: AuthUser) -> impl IntoResponse {
    info!(user_id = %user.user_id(), "User logged out");
    Json(json!({ "message": "Logged out successfully" }))
}
