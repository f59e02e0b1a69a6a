//! New-account validation.
//!
//! Rules are checked in a fixed order and the first failure wins:
//! username, password presence, password length, confirmation.

use crate::account::{AccountDraft, CreateAccount};
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::ValidationFailure;

/// Password policy knob.
///
/// `min_length` counts characters, not bytes. It is never below 1, so an
/// empty password is always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(MIN_PASSWORD_LENGTH)
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(1),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Check presence and length of a password.
    pub fn check(&self, password: &str) -> Result<(), ValidationFailure> {
        if password.is_empty() || password.chars().count() < self.min_length {
            return Err(ValidationFailure::WeakPassword {
                min_length: self.min_length,
            });
        }
        Ok(())
    }
}

/// Pure validator for [`CreateAccount`] requests.
#[derive(Debug, Clone, Default)]
pub struct AccountValidator {
    policy: PasswordPolicy,
}

impl AccountValidator {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    /// Validate a creation request into a draft.
    ///
    /// The username is kept exactly as submitted, so lookups by that same
    /// string find the created account.
    pub fn validate(&self, request: &CreateAccount) -> Result<AccountDraft, ValidationFailure> {
        if request.username.is_empty() {
            return Err(ValidationFailure::InvalidUsername(
                "username is required".to_string(),
            ));
        }

        self.policy.check(&request.password)?;

        // Byte-equal, case-sensitive
        if request.confirm_password != request.password {
            return Err(ValidationFailure::PasswordMismatch);
        }

        Ok(AccountDraft {
            username: request.username.clone(),
            password: request.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(username: &str, password: &str, confirm: &str) -> Result<AccountDraft, ValidationFailure> {
        AccountValidator::default().validate(&CreateAccount::new(username, password, confirm))
    }

    #[test]
    fn test_valid_request_produces_draft() {
        let draft = validate("newUser", "pass1234", "pass1234").unwrap();

        assert_eq!(draft.username, "newUser");
        assert_eq!(draft.password, "pass1234");
    }

    #[test]
    fn test_username_is_kept_verbatim() {
        let draft = validate("  newUser\t", "pass1234", "pass1234").unwrap();

        assert_eq!(draft.username, "  newUser\t");
    }

    #[test]
    fn test_empty_username_rejected() {
        assert!(matches!(
            validate("", "pass1234", "pass1234"),
            Err(ValidationFailure::InvalidUsername(_))
        ));
    }

    #[test]
    fn test_long_username_accepted() {
        let username = "u".repeat(65);

        let draft = validate(&username, "pass1234", "pass1234").unwrap();

        assert_eq!(draft.username, username);
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(
            validate("test", "", ""),
            Err(ValidationFailure::WeakPassword {
                min_length: MIN_PASSWORD_LENGTH
            })
        );
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(matches!(
            validate("test", "abcd", "abcd"),
            Err(ValidationFailure::WeakPassword { .. })
        ));
    }

    #[test]
    fn test_password_minimum_length_boundary() {
        let exact = "a".repeat(MIN_PASSWORD_LENGTH);
        let short = "a".repeat(MIN_PASSWORD_LENGTH - 1);

        assert!(validate("test", &exact, &exact).is_ok());
        assert!(validate("test", &short, &short).is_err());
        assert!(validate("test", "12345678", "12345678").is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 7 characters, 14 bytes
        let password = "ééééééé";

        assert!(validate("test", password, password).is_ok());
    }

    #[test]
    fn test_confirmation_mismatch_rejected() {
        assert_eq!(
            validate("test", "pass1234", "pass12345"),
            Err(ValidationFailure::PasswordMismatch)
        );
        assert_eq!(
            validate("test", "pass1234", "PASS1234"),
            Err(ValidationFailure::PasswordMismatch)
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Username rule is checked before the password rules
        assert!(matches!(
            validate("", "", "x"),
            Err(ValidationFailure::InvalidUsername(_))
        ));
        // Length is checked before the confirmation
        assert!(matches!(
            validate("test", "abc", "xyz"),
            Err(ValidationFailure::WeakPassword { .. })
        ));
    }

    #[test]
    fn test_custom_policy() {
        let validator = AccountValidator::new(PasswordPolicy::new(12));

        assert!(validator
            .validate(&CreateAccount::new("test", "pass1234", "pass1234"))
            .is_err());
        assert!(validator
            .validate(&CreateAccount::new("test", "pass12345678", "pass12345678"))
            .is_ok());
    }

    #[test]
    fn test_zero_min_length_still_rejects_empty_password() {
        let policy = PasswordPolicy::new(0);

        assert_eq!(policy.min_length(), 1);
        assert!(policy.check("").is_err());
        assert!(policy.check("x").is_ok());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let validator = AccountValidator::default();
        let request = CreateAccount::new("test", "abc", "abc");

        assert_eq!(validator.validate(&request), validator.validate(&request));
    }
}
