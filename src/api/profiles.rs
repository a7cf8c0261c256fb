use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{
    ApiError, AppState, UpdateProfileRequest, UserProfileResponse, UserProfileUpdateResponse,
};
use crate::services::UpdateProfile;

/// GET /user/profile/{id}
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile = state.profile_service().get_profile(&id).await?;
    Ok(Json(profile.into()))
}

/// PUT /user/profile/{id}/update
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfileUpdateResponse>, ApiError> {
    let updated = state
        .profile_service()
        .update_profile(
            &id,
            UpdateProfile {
                email: payload.email,
                first_name: payload.first_name,
                last_name: payload.last_name,
                bio: payload.bio,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}
