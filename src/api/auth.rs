use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, LoginRequest, LogoutQuery, LogoutResponse, UserLoginResponse};

/// POST /auth/login/
/// Verify email and password. The returned session token is a fixed
/// placeholder and grants nothing.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserLoginResponse>, ApiError> {
    let result = state
        .auth_service()
        .login(&payload.email, &payload.password)
        .await?;

    tracing::Span::current().record("user_id", result.user_id.as_str());

    Ok(Json(result.into()))
}

/// POST /auth/logout/
/// Mark the caller's latest access log entry; there is no session to end.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogoutQuery>,
) -> Json<LogoutResponse> {
    let result = state.auth_service().logout(query.user_id.as_deref()).await;
    Json(result.into())
}
