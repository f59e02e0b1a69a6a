//! Repository layer for data access.

pub mod entities;
mod account_repository;
mod memory;

pub use account_repository::{AccountRepository, AccountStore};
pub use memory::InMemoryAccountStore;

#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
