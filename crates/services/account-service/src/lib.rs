//! Account Service Library
//!
//! Account creation and lookup over HTTP. The service runs either on
//! PostgreSQL (SeaORM) or, when no database is configured, on an
//! in-memory store.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use domain::{Argon2Hasher, PasswordPolicy};

use crate::api::{create_router, AppState};
use crate::config::AccountServiceConfig;
use crate::infra::Database;
use crate::repository::{AccountRepository, AccountStore, InMemoryAccountStore};
use crate::service::AccountManager;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire repository, hasher and service into the HTTP state.
///
/// `in_memory` forces the in-memory store even when a database is configured.
pub async fn build_state(
    config: &AccountServiceConfig,
    in_memory: bool,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let (repo, database): (Arc<dyn AccountRepository>, Option<Arc<Database>>) =
        match &config.database {
            Some(db_config) if !in_memory => {
                let db = Arc::new(Database::connect(db_config).await?);
                let repo: Arc<dyn AccountRepository> = Arc::new(AccountStore::new(db.get_connection()));
                (repo, Some(db))
            }
            _ => {
                info!("Using in-memory account store");
                let repo: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountStore::new());
                (repo, None)
            }
        };

    let service = AccountManager::with_policy(
        repo,
        Arc::new(Argon2Hasher::new()),
        PasswordPolicy::new(config.min_password_length),
    );

    Ok(AppState::new(Arc::new(service), database))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    config: AccountServiceConfig,
    in_memory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config, in_memory).await?;
    let app = create_router(state);

    let addr: SocketAddr = config.service.addr().parse()?;
    info!("Account service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: AccountServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db_config = config
        .database
        .ok_or("ACCOUNT_SERVICE_DATABASE_URL or DATABASE_URL must be set to run migrations")?;
    let db = Database::connect_without_migrations(&db_config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
