//! Account handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use common::{AppResult, OptionExt};
use domain::{AccountId, AccountResponse, CreateAccount};

use crate::api::extractors::AppJson;
use crate::api::AppState;

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_account))
        .route("/id/:id", get(find_by_id))
        .route("/:username", get(find_by_username))
}

/// Create a new account
///
/// 200 with the created account, 400 when validation fails.
pub async fn create_account(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAccount>,
) -> AppResult<Json<AccountResponse>> {
    let account = state.account_service.create_account(payload).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Get account by username
pub async fn find_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<AccountResponse>> {
    let account = state
        .account_service
        .find_by_username(&username)
        .await?
        .ok_or_not_found()?;

    Ok(Json(AccountResponse::from(account)))
}

/// Get account by ID
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> AppResult<Json<AccountResponse>> {
    let account = state
        .account_service
        .find_by_id(id)
        .await?
        .ok_or_not_found()?;

    Ok(Json(AccountResponse::from(account)))
}
