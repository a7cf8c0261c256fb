use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::entities::image_requests;
use crate::entities::sea_orm_active_enums::{AiModel, ImageRequestStatus};

pub use crate::entities::image_requests::Model as ImageRequest;

#[derive(Debug, Clone)]
pub struct NewImageRequest<'a> {
    pub user_id: Option<&'a str>,
    pub text_description: &'a str,
    pub ai_model: AiModel,
    pub theme: Option<&'a str>,
    pub style: Option<&'a str>,
}

pub struct ImageRequestRepository {
    conn: DatabaseConnection,
}

impl ImageRequestRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a request in the `PROCESSING` state.
    pub async fn create(&self, request: &NewImageRequest<'_>) -> Result<ImageRequest> {
        let now = chrono::Utc::now().to_rfc3339();

        let model = image_requests::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(request.user_id.map(str::to_string)),
            text_description: Set(request.text_description.to_string()),
            ai_model: Set(request.ai_model),
            theme: Set(request.theme.map(str::to_string)),
            style: Set(request.style.map(str::to_string)),
            status: Set(ImageRequestStatus::Processing),
            image_url: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        }
        .insert(&self.conn)
        .await
        .context("Failed to insert image request")?;

        Ok(model)
    }

    pub async fn complete(&self, request: ImageRequest, image_url: &str) -> Result<ImageRequest> {
        let mut active: image_requests::ActiveModel = request.into();
        active.status = Set(ImageRequestStatus::Completed);
        active.image_url = Set(Some(image_url.to_string()));
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to complete image request")?;

        Ok(updated)
    }

    pub async fn get(&self, id: &str) -> Result<Option<ImageRequest>> {
        image_requests::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query image request")
    }
}
