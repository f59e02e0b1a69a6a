//! Credential hashing - one-way transform of plaintext passwords.
//!
//! The service depends on the [`CredentialHasher`] trait; [`Argon2Hasher`]
//! is the production implementation and keeps the Argon2 configuration in a
//! single place.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Turns a plaintext password into the credential stored with an account.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialHasher: Send + Sync {
    /// Derive a stored credential. Never returns the plaintext itself.
    fn encode(&self, plain_text: &str) -> DomainResult<String>;
}

/// Argon2id hasher producing PHC strings with a random salt.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Hasher").finish_non_exhaustive()
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Argon2Hasher {
    /// Create a hasher with the recommended Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Errors
    /// Returns a hashing error if Argon2 rejects the parameters.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> DomainResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| DomainError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Check a plaintext password against a stored credential.
    pub fn verify(&self, plain_text: &str, stored: &str) -> bool {
        // Parameters are read from the PHC string, not from `self`
        match PasswordHash::new(stored) {
            Ok(parsed) => self
                .argon2
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl CredentialHasher for Argon2Hasher {
    fn encode(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::hashing(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}
