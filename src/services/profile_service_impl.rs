//! `SeaORM` implementation of the `ProfileService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::{ProfileChanges, Store};
use crate::services::profile_service::{
    ProfileError, ProfileService, UpdateProfile, UpdatedProfile, UserProfile,
};

pub struct SeaOrmProfileService {
    store: Store,
}

impl SeaOrmProfileService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileService for SeaOrmProfileService {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, ProfileError> {
        let (user, profile) = self
            .store
            .get_user_with_profile(user_id)
            .await?
            .ok_or(ProfileError::UserNotFound)?;

        let (first_name, last_name) = profile
            .map(|p| (p.first_name, p.last_name))
            .unwrap_or_default();

        Ok(UserProfile {
            user_id: user.id,
            email: user.email,
            first_name,
            last_name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: UpdateProfile,
    ) -> Result<UpdatedProfile, ProfileError> {
        if let Some(owner) = self.store.get_user_by_email(&update.email).await?
            && owner.id != user_id
        {
            return Err(ProfileError::EmailTaken);
        }

        let user = self
            .store
            .update_user_email(user_id, &update.email)
            .await?
            .ok_or(ProfileError::UserNotFound)?;

        let changes = ProfileChanges {
            first_name: &update.first_name,
            last_name: &update.last_name,
            bio: update.bio.as_deref(),
        };

        let profile = self
            .store
            .update_profile(user_id, &changes)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        info!(user_id = %user.id, "User profile updated");

        Ok(UpdatedProfile {
            id: user.id,
            email: user.email,
            first_name: update.first_name,
            last_name: update.last_name,
            bio: profile.bio,
            updated_at: profile.updated_at,
        })
    }
}
