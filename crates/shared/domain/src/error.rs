//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Reason a new-account request was rejected.
///
/// Exactly one reason is reported: the validator stops at the first rule
/// that fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Username is empty
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Password is empty or shorter than the policy minimum
    #[error("Password must be at least {min_length} characters")]
    WeakPassword { min_length: usize },

    /// Confirmation differs from the password
    #[error("Password and confirmation do not match")]
    PasswordMismatch,
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Creation request failed validation
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Credential could not be derived from the plaintext
    #[error("Hashing error: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
