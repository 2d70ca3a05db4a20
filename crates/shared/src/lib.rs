//! Shared errors, configuration, and token handling for Budgetly.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - Token claims and auth payloads
//! - Bearer token issuance and validation

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

pub use auth::Claims;
pub use config::{AppConfig, PasswordConfig};
pub use error::AppError;
pub use jwt::{TokenConfig, TokenError, TokenService};
