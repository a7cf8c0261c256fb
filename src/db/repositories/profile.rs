use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::profiles;

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl Profile {
    /// "First Last", or whichever half is present. `None` when both are blank.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Clone)]
pub struct ProfileChanges<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub bio: Option<&'a str>,
}

pub struct ProfileRepository {
    conn: DatabaseConnection,
}

impl ProfileRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn first_for_user(&self, user_id: &str) -> Result<Option<Profile>> {
        let profile = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .order_by_asc(profiles::Column::CreatedAt)
            .one(&self.conn)
            .await
            .context("Failed to query profile by user")?;

        Ok(profile.map(Profile::from))
    }

    /// Update the user's first profile. Returns `None` when the user has none.
    pub async fn update_for_user(
        &self,
        user_id: &str,
        changes: &ProfileChanges<'_>,
    ) -> Result<Option<Profile>> {
        let Some(profile) = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .order_by_asc(profiles::Column::CreatedAt)
            .one(&self.conn)
            .await
            .context("Failed to query profile for update")?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().to_rfc3339();

        let mut active: profiles::ActiveModel = profile.into();
        active.first_name = Set(Some(changes.first_name.to_string()));
        active.last_name = Set(Some(changes.last_name.to_string()));
        active.bio = Set(changes.bio.map(str::to_string));
        active.updated_at = Set(now);
        let updated = active.update(&self.conn).await?;

        Ok(Some(Profile::from(updated)))
    }

    pub async fn count_for_user(&self, user_id: &str) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .count(&self.conn)
            .await
            .context("Failed to count profiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: Option<&str>, last: Option<&str>) -> Profile {
        Profile {
            id: "p".to_string(),
            user_id: "u".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            bio: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            profile(Some("Ada"), Some("Lovelace")).display_name().as_deref(),
            Some("Ada Lovelace")
        );
        assert_eq!(profile(Some("Ada"), None).display_name().as_deref(), Some("Ada"));
        assert_eq!(profile(None, Some(" Lovelace ")).display_name().as_deref(), Some("Lovelace"));
        assert_eq!(profile(None, None).display_name(), None);
        assert_eq!(profile(Some(""), Some("  ")).display_name(), None);
    }
}
