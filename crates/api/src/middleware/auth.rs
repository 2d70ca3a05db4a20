//! Authentication middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use budgetly_db::UserRepository;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// The authenticated caller, resolved from the bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// User ID.
    pub id: Uuid,
    /// Username (the token subject).
    pub username: String,
}

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware that validates bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the token service
/// 3. Loads the user named by the token; a deleted user is rejected
/// 4. Stores the `CurrentUser` in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return ApiError::unauthorized("Not authenticated").into_response();
    };

    let username = match state.token_service.validate(token) {
        Ok(username) => username,
        Err(e) => {
            info!(reason = %e, "Rejected bearer token");
            return ApiError::from(e).into_response();
        }
    };

    let user_repo = UserRepository::new((*state.db).clone());
    let user = match user_repo.find_by_username(&username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!(username = %username, "Token for unknown user");
            return ApiError::unauthorized(INVALID_CREDENTIALS).into_response();
        }
        Err(e) => {
            error!(error = %e, "Database error during authentication");
            return ApiError::from(e).into_response();
        }
    };

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
    });
    next.run(request).await
}

/// Extractor for the authenticated user.
///
/// Use this in handlers behind `auth_middleware`:
///
/// ```ignore
/// async fn handler(user: AuthUser) -> impl IntoResponse {
///     let user_id = user.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl AuthUser {
    /// Returns the user ID.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.0.id
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}
