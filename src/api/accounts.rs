use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{
    ApiError, AppState, CreateAccountRequest, CreateUserResponse, DeleteUserAccountResponse,
};
use crate::services::CreateAccount;

/// POST /user/account/
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let created = state
        .account_service()
        .create_account(CreateAccount {
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
        })
        .await?;

    Ok(Json(created.into()))
}

/// DELETE /user/account/{id}
/// Always 200: a failed delete is reported in the message.
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<DeleteUserAccountResponse> {
    let outcome = state.account_service().delete_account(&id).await;
    Json(outcome.into())
}
