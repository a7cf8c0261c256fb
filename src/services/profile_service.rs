//! Domain service for reading and updating a user's profile.

use thiserror::Error;

use crate::entities::sea_orm_active_enums::UserRole;

/// Errors specific to profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("The provided email address is already associated with an existing account.")]
    EmailTaken,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for ProfileError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ProfileError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// User joined with its first profile, flattened.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdatedProfile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub updated_at: String,
}

#[async_trait::async_trait]
pub trait ProfileService: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, ProfileError>;

    /// Writes the email, then the profile fields. The two writes are not
    /// transactional: a missing profile leaves the new email in place.
    async fn update_profile(
        &self,
        user_id: &str,
        update: UpdateProfile,
    ) -> Result<UpdatedProfile, ProfileError>;
}
