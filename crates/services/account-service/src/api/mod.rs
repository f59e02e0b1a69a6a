//! API layer - HTTP handlers and routes
//!
//! Thin mapping from HTTP requests onto [`AccountService`](crate::service::AccountService)
//! calls. Status codes come from [`AppError`](common::AppError).

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
