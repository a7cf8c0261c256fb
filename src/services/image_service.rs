//! Domain service for image generation requests and the model catalog.
//!
//! Generation is a stub: no model is invoked and every request completes
//! immediately with a placeholder URL.

use thiserror::Error;

use crate::entities::sea_orm_active_enums::{AiModel, ImageRequestStatus};
use crate::models::AiModelDetail;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for ImageError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ImageError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct GenerateImage {
    pub user_id: Option<String>,
    pub text_description: String,
    pub ai_model: AiModel,
    pub theme: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub request_id: String,
    pub image_url: String,
    pub status: ImageRequestStatus,
    pub ai_model_used: AiModel,
    pub text_description_used: String,
}

#[async_trait::async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate(&self, request: GenerateImage) -> Result<GeneratedImage, ImageError>;

    fn list_models(&self) -> Vec<AiModelDetail>;
}
