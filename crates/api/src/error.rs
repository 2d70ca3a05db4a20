//! Mapping from domain and repository errors to HTTP responses.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use budgetly_core::auth::{CredentialError, PasswordError};
use budgetly_core::ledger::LedgerError;
use budgetly_db::{CategoryError, LedgerStoreError, UserError};
use budgetly_shared::{AppError, TokenError};
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

/// Handler error; renders as `{"error": CODE, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// 401 with the given message.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(AppError::Unauthorized(message.into()))
    }

    /// 404 with the given message.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::NotFound(message.into()))
    }

    /// 400 with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let body = Json(json!({
            "error": self.0.error_code(),
            "message": self.0.public_message(),
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        let message = err.client_message();
        match err {
            TokenError::Encoding(msg) => Self(AppError::Internal(msg)),
            TokenError::Expired | TokenError::Invalid => Self::unauthorized(message),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::TotalOverflow => Self(AppError::Internal(err.to_string())),
            _ => Self::validation(err.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameTaken(_) => Self::validation("Username already registered"),
            UserError::Database(e) => e.into(),
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => Self::not_found("Category not found"),
            CategoryError::Duplicate(name) => {
                Self::validation(format!("Category '{name}' already exists"))
            }
            CategoryError::InUse(_) => Self::validation("Category is still used by records"),
            CategoryError::Invalid(e) => e.into(),
            CategoryError::Database(e) => e.into(),
        }
    }
}

impl From<LedgerStoreError> for ApiError {
    fn from(err: LedgerStoreError) -> Self {
        match err {
            LedgerStoreError::NotFound(_) => Self::not_found("Record not found"),
            LedgerStoreError::Invalid(e) => e.into(),
            LedgerStoreError::Database(e) => e.into(),
        }
    }
}
