use anyhow::{Context, Result};
use chrono::SecondsFormat;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::access_logs;

pub use crate::entities::access_logs::Model as AccessLog;

pub struct AccessLogRepository {
    conn: DatabaseConnection,
}

impl AccessLogRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn record(&self, user_id: &str, endpoint: &str) -> Result<AccessLog> {
        let entry = access_logs::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            endpoint: Set(endpoint.to_string()),
            // Fixed-width so ordering by the text column is chronological.
            accessed_at: Set(chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
        }
        .insert(&self.conn)
        .await
        .context("Failed to record access log")?;

        Ok(entry)
    }

    pub async fn latest_for_user(&self, user_id: &str) -> Result<Option<AccessLog>> {
        access_logs::Entity::find()
            .filter(access_logs::Column::UserId.eq(user_id))
            .order_by_desc(access_logs::Column::AccessedAt)
            .one(&self.conn)
            .await
            .context("Failed to query latest access log")
    }

    pub async fn append_to_endpoint(&self, entry: AccessLog, suffix: &str) -> Result<AccessLog> {
        let endpoint = format!("{}{suffix}", entry.endpoint);

        let mut active: access_logs::ActiveModel = entry.into();
        active.endpoint = Set(endpoint);
        let updated = active.update(&self.conn).await?;

        Ok(updated)
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<AccessLog>> {
        access_logs::Entity::find()
            .filter(access_logs::Column::UserId.eq(user_id))
            .order_by_desc(access_logs::Column::AccessedAt)
            .all(&self.conn)
            .await
            .context("Failed to list access logs")
    }
}
