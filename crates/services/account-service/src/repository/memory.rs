//! In-memory account repository.
//!
//! Used when no database is configured and as a real collaborator in tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{Account, AccountId, NewAccount, FIRST_ACCOUNT_ID};

use super::AccountRepository;

#[derive(Debug)]
struct Accounts {
    by_id: BTreeMap<AccountId, Account>,
    /// Index for username -> account ID lookup
    username_index: HashMap<String, AccountId>,
    /// `None` once the id space is used up
    next_id: Option<AccountId>,
}

/// In-memory implementation of AccountRepository.
///
/// Ids are handed out sequentially from [`FIRST_ACCOUNT_ID`]; usernames are
/// unique. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl InMemoryAccountStore {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::with_accounts(Vec::new())
    }

    /// Create a repository with initial accounts.
    ///
    /// The next assigned id follows the highest seeded one. A seed whose id
    /// or username is already taken by an earlier seed is skipped.
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let mut by_id: BTreeMap<AccountId, Account> = BTreeMap::new();
        let mut username_index: HashMap<String, AccountId> = HashMap::new();

        for account in accounts {
            if by_id.contains_key(&account.id) || username_index.contains_key(&account.username) {
                tracing::warn!(
                    id = account.id,
                    username = %account.username,
                    "Skipping duplicate seed account"
                );
                continue;
            }
            username_index.insert(account.username.clone(), account.id);
            by_id.insert(account.id, account);
        }

        let next_id = match by_id.keys().next_back() {
            Some(last) => last.checked_add(1),
            None => Some(FIRST_ACCOUNT_ID),
        };

        Self {
            accounts: Arc::new(RwLock::new(Accounts {
                by_id,
                username_index,
                next_id,
            })),
        }
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn save(&self, account: NewAccount) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts.username_index.contains_key(&account.username) {
            return Err(AppError::conflict(format!(
                "Username '{}'",
                account.username
            )));
        }

        let id = accounts
            .next_id
            .ok_or_else(|| AppError::internal("Account id space exhausted"))?;
        let account = account.into_account(id);

        accounts.next_id = id.checked_add(1);
        accounts.username_index.insert(account.username.clone(), id);
        accounts.by_id.insert(id, account.clone());

        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;

        Ok(accounts
            .username_index
            .get(username)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.by_id.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_account_gets_initial_id() {
        let store = InMemoryAccountStore::new();

        let first = store.save(NewAccount::new("first", "h1")).await.unwrap();
        let second = store.save(NewAccount::new("second", "h2")).await.unwrap();

        assert_eq!(first.id, FIRST_ACCOUNT_ID);
        assert_eq!(second.id, FIRST_ACCOUNT_ID + 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_lookup_by_username_and_id() {
        let store = InMemoryAccountStore::new();
        let saved = store.save(NewAccount::new("alice", "hash")).await.unwrap();

        let by_name = store.find_by_username("alice").await.unwrap();
        let by_id = store.find_by_id(saved.id).await.unwrap();

        assert_eq!(by_name.as_ref(), Some(&saved));
        assert_eq!(by_id, Some(saved));
    }

    #[tokio::test]
    async fn test_missing_account_is_none() {
        let store = InMemoryAccountStore::new();

        assert!(store.find_by_username("unknown").await.unwrap().is_none());
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = InMemoryAccountStore::new();
        store.save(NewAccount::new("alice", "h1")).await.unwrap();

        let result = store.save(NewAccount::new("alice", "h2")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_sensitive() {
        let store = InMemoryAccountStore::new();
        store.save(NewAccount::new("Alice", "h1")).await.unwrap();

        assert!(store.find_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeded_store_continues_after_highest_id() {
        let store = InMemoryAccountStore::with_accounts(vec![
            Account::new(0, "test1".to_string(), "h".to_string()),
            Account::new(5, "test2".to_string(), "h".to_string()),
        ]);

        let next = store.save(NewAccount::new("test3", "h")).await.unwrap();

        assert_eq!(next.id, 6);
        assert_eq!(store.find_by_username("test1").await.unwrap().unwrap().id, 0);
    }

    #[tokio::test]
    async fn test_seeding_skips_repeated_username() {
        let store = InMemoryAccountStore::with_accounts(vec![
            Account::new(0, "test1".to_string(), "first".to_string()),
            Account::new(1, "test1".to_string(), "second".to_string()),
        ]);

        let found = store.find_by_username("test1").await.unwrap().unwrap();

        assert_eq!(found.id, 0);
        assert_eq!(found.password_hash, "first");
        assert_eq!(store.len().await, 1);
        assert!(store.find_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeding_skips_repeated_id() {
        let store = InMemoryAccountStore::with_accounts(vec![
            Account::new(0, "test1".to_string(), "h".to_string()),
            Account::new(0, "test2".to_string(), "h".to_string()),
        ]);

        assert_eq!(store.len().await, 1);
        assert!(store.find_by_username("test2").await.unwrap().is_none());
        assert_eq!(store.find_by_id(0).await.unwrap().unwrap().username, "test1");
    }

    #[tokio::test]
    async fn test_seed_at_max_id_does_not_overflow() {
        let store = InMemoryAccountStore::with_accounts(vec![Account::new(
            i64::MAX,
            "last".to_string(),
            "h".to_string(),
        )]);

        let result = store.save(NewAccount::new("next", "h")).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(store.len().await, 1);
        assert!(store.find_by_id(i64::MAX).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = InMemoryAccountStore::new();
        let handle = store.clone();

        store.save(NewAccount::new("shared", "h")).await.unwrap();

        assert!(handle.find_by_username("shared").await.unwrap().is_some());
    }
}
