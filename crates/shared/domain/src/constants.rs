//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 7;

// =============================================================================
// Identity
// =============================================================================

/// Identifier handed out to the first account a fresh store persists
pub const FIRST_ACCOUNT_ID: i64 = 0;
