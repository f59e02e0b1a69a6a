//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::AccountService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account service
    pub account_service: Arc<dyn AccountService>,
    /// Database connection, absent when running on the in-memory store
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create new app state.
    pub fn new(account_service: Arc<dyn AccountService>, database: Option<Arc<Database>>) -> Self {
        Self {
            account_service,
            database,
        }
    }
}
