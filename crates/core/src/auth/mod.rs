//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing and verification (`CredentialStore`)
//! - Registration input rules

mod password;

pub use password::{CredentialStore, PasswordError};

use thiserror::Error;

/// Longest accepted username, in characters.
pub const MAX_USERNAME_LEN: usize = 150;

/// Rejected registration input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Username is empty or whitespace.
    #[error("username must not be empty")]
    EmptyUsername,

    /// Username exceeds `MAX_USERNAME_LEN`.
    #[error("username must be at most {MAX_USERNAME_LEN} characters")]
    UsernameTooLong,

    /// Password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Checks registration input and returns the normalized username.
///
/// Surrounding whitespace is trimmed from the username; the password is
/// taken as-is.
pub fn validate_credentials<'a>(
    username: &'a str,
    password: &str,
) -> Result<&'a str, CredentialError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(CredentialError::EmptyUsername);
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(CredentialError::UsernameTooLong);
    }
    if password.is_empty() {
        return Err(CredentialError::EmptyPassword);
    }

    Ok(username)
}
