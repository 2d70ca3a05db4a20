//! Core business logic for Budgetly.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `auth` - Password hashing and credential rules
//! - `ledger` - Income/expense rules and balance calculation

pub mod auth;
pub mod ledger;
