//! Account service - Handles account creation and lookup.
//!
//! Creation runs validate -> hash -> save and stops at the first failure.
//! A rejected request never reaches the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{
    Account, AccountId, AccountValidator, CreateAccount, CredentialHasher, NewAccount,
    PasswordPolicy,
};

use crate::repository::AccountRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Validate, hash and persist a new account
    async fn create_account(&self, request: CreateAccount) -> AppResult<Account>;

    /// Get account by username, `None` when absent
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Get account by ID, `None` when absent
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>>;
}

/// Concrete implementation of AccountService.
///
/// Holds no mutable state; all shared state lives in the repository.
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
    hasher: Arc<dyn CredentialHasher>,
    validator: AccountValidator,
}

impl AccountManager {
    /// Create new account service with the default password policy
    pub fn new(repo: Arc<dyn AccountRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self::with_policy(repo, hasher, PasswordPolicy::default())
    }

    /// Create new account service with an explicit password policy
    pub fn with_policy(
        repo: Arc<dyn AccountRepository>,
        hasher: Arc<dyn CredentialHasher>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            repo,
            hasher,
            validator: AccountValidator::new(policy),
        }
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.validator.policy()
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn create_account(&self, request: CreateAccount) -> AppResult<Account> {
        let draft = self.validator.validate(&request).map_err(|failure| {
            tracing::debug!(username = %request.username, reason = %failure, "Account request rejected");
            AppError::from(failure)
        })?;

        let password_hash = self.hasher.encode(&draft.password)?;
        if password_hash.is_empty() || password_hash == draft.password {
            return Err(AppError::internal(
                "Credential hasher did not produce a stored credential",
            ));
        }

        let account = self
            .repo
            .save(NewAccount::new(draft.username, password_hash))
            .await?;

        tracing::info!(account_id = account.id, username = %account.username, "Account created");
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let account = self.repo.find_by_username(username).await?;
        tracing::debug!(username, found = account.is_some(), "Account lookup by username");
        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        let account = self.repo.find_by_id(id).await?;
        tracing::debug!(account_id = id, found = account.is_some(), "Account lookup by id");
        Ok(account)
    }
}
