//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings, so the salt and cost parameters travel with the
//! hash and verification does not depend on the store's current settings.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, Version,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use budgetly_shared::PasswordConfig;
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Cost parameters were rejected by Argon2.
    #[error("invalid password hashing parameters: {0}")]
    InvalidParams(String),

    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),
}

/// Hashes and verifies user passwords.
#[derive(Clone)]
pub struct CredentialStore {
    hasher: Argon2<'static>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("params", self.hasher.params())
            .finish()
    }
}

impl CredentialStore {
    /// Creates a store hashing with Argon2id and the given cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::InvalidParams` if Argon2 rejects the parameters.
    pub fn new(config: PasswordConfig) -> Result<Self, PasswordError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self {
            hasher: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes a raw password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::HashError` if hashing fails.
    ///
    /// # Example
    ///
    /// ```
    /// use budgetly_core::auth::CredentialStore;
    /// use budgetly_shared::PasswordConfig;
    ///
    /// let store = CredentialStore::new(PasswordConfig::default()).unwrap();
    /// let hash = store.set_password("my_secure_password").unwrap();
    /// assert!(hash.starts_with("$argon2id$"));
    /// ```
    pub fn set_password(&self, raw: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.hasher
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Returns `true` only if `raw` is the password `hash` was made from.
    ///
    /// A hash that cannot be parsed, or that names another algorithm,
    /// never matches.
    ///
    /// ```
    /// use budgetly_core::auth::CredentialStore;
    /// use budgetly_shared::PasswordConfig;
    ///
    /// let store = CredentialStore::new(PasswordConfig::default()).unwrap();
    /// let hash = store.set_password("my_password").unwrap();
    /// assert!(store.verify_password("my_password", &hash));
    /// assert!(!store.verify_password("wrong_password", &hash));
    /// ```
    pub fn verify_password(&self, raw: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.hasher
            .verify_password(raw.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
