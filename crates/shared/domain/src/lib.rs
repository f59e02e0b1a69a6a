//! Domain layer - Core account entities and business rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the account entity, the new-account validator and the credential hasher.

pub mod account;
pub mod constants;
pub mod error;
pub mod password;
pub mod validation;

pub use account::{Account, AccountDraft, AccountId, AccountResponse, CreateAccount, NewAccount};
pub use constants::*;
pub use error::{DomainError, DomainResult, ValidationFailure};
pub use password::{Argon2Hasher, CredentialHasher};
pub use validation::{AccountValidator, PasswordPolicy};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockCredentialHasher;
