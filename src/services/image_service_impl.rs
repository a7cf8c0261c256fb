//! `SeaORM` implementation of the `ImageGenerationService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{NewImageRequest, Store};
use crate::models::{AiModelDetail, catalog};
use crate::services::image_service::{
    GenerateImage, GeneratedImage, ImageError, ImageGenerationService,
};

pub struct SeaOrmImageGenerationService {
    store: Store,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmImageGenerationService {
    #[must_use]
    pub const fn new(store: Store, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl ImageGenerationService for SeaOrmImageGenerationService {
    async fn generate(&self, request: GenerateImage) -> Result<GeneratedImage, ImageError> {
        // An unknown owner is dropped rather than failing the request.
        let user_id = match request.user_id.as_deref() {
            Some(id) => {
                let known = self.store.get_user_by_id(id).await?.is_some();
                if !known {
                    warn!(user_id = %id, "Image request names an unknown user, storing it unowned");
                }
                known.then_some(id)
            }
            None => None,
        };

        let new_request = NewImageRequest {
            user_id,
            text_description: &request.text_description,
            ai_model: request.ai_model,
            theme: request.theme.as_deref(),
            style: request.style.as_deref(),
        };

        let pending = self.store.create_image_request(&new_request).await?;

        let placeholder_url = self.config.read().await.images.placeholder_url.clone();
        let completed = self
            .store
            .complete_image_request(pending, &placeholder_url)
            .await?;

        info!(
            request_id = %completed.id,
            model = ?completed.ai_model,
            "Image request completed"
        );

        Ok(GeneratedImage {
            request_id: completed.id,
            image_url: completed.image_url.unwrap_or(placeholder_url),
            status: completed.status,
            ai_model_used: completed.ai_model,
            text_description_used: completed.text_description,
        })
    }

    fn list_models(&self) -> Vec<AiModelDetail> {
        catalog()
    }
}
