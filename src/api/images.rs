use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, GenerateImageRequest, GenerateImageResponse, ListModelResponse};
use crate::services::GenerateImage;

/// POST /image/generate/
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateImageRequest>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    let image = state
        .image_service()
        .generate(GenerateImage {
            user_id: payload.user_id,
            text_description: payload.text_description,
            ai_model: payload.ai_model,
            theme: payload.theme,
            style: payload.style,
        })
        .await?;

    Ok(Json(image.into()))
}

/// GET /ai/models/
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ListModelResponse> {
    Json(ListModelResponse {
        ai_models: state.image_service().list_models(),
    })
}
