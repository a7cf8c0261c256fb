use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::{AiModel, ImageRequestStatus, UserRole};
use crate::models::AiModelDetail;
use crate::services::{
    CreatedAccount, DeleteOutcome, GeneratedImage, LoginResult, LogoutResult, UpdatedProfile,
    UserProfile,
};

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub user_id: String,
    pub email: String,
    pub message: String,
}

impl From<CreatedAccount> for CreateUserResponse {
    fn from(account: CreatedAccount) -> Self {
        Self {
            user_id: account.user_id,
            email: account.email,
            message: account.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteUserAccountResponse {
    pub message: String,
}

impl From<DeleteOutcome> for DeleteUserAccountResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            message: outcome.message,
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfoDto {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
pub struct UserLoginResponse {
    pub session_token: String,
    pub user_info: UserInfoDto,
}

impl From<LoginResult> for UserLoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            session_token: result.session_token,
            user_info: UserInfoDto {
                name: result.user_info.name,
                email: result.user_info.email,
                role: result.user_info.role,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogoutQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl From<LogoutResult> for LogoutResponse {
    fn from(result: LogoutResult) -> Self {
        Self {
            success: result.success,
            message: Some(result.message),
        }
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    #[serde(rename = "user_id")]
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            role: profile.role,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdateResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub updated_at: String,
}

impl From<UpdatedProfile> for UserProfileUpdateResponse {
    fn from(profile: UpdatedProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            bio: profile.bio,
            updated_at: profile.updated_at,
        }
    }
}

// ============================================================================
// Images
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub text_description: String,
    pub ai_model: AiModel,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    pub image_url: String,
    pub status: ImageRequestStatus,
    pub ai_model_used: AiModel,
    pub text_description_used: String,
}

impl From<GeneratedImage> for GenerateImageResponse {
    fn from(image: GeneratedImage) -> Self {
        Self {
            image_url: image.image_url,
            status: image.status,
            ai_model_used: image.ai_model_used,
            text_description_used: image.text_description_used,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListModelResponse {
    pub ai_models: Vec<AiModelDetail>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
}
