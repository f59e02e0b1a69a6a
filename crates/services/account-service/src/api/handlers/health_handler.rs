//! Health check handler.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::api::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: StoreHealth,
}

/// Account store health with optional error message.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub kind: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint - pings the database when one is configured.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = match &state.database {
        None => StoreHealth {
            kind: "in-memory",
            status: "healthy",
            error: None,
        },
        Some(db) => match db.ping().await {
            Ok(()) => StoreHealth {
                kind: "postgres",
                status: "healthy",
                error: None,
            },
            Err(e) => StoreHealth {
                kind: "postgres",
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        },
    };

    let (status, code) = if store.status == "healthy" {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (code, Json(HealthResponse { status, store }))
}
