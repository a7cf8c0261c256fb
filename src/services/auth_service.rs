//! Domain service for login and logout.
//!
//! There is no real session: login hands out a fixed placeholder token and
//! logout only annotates the caller's latest access log entry.

use thiserror::Error;

use crate::entities::sea_orm_active_enums::UserRole;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Identifying information about the logged-in user.
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Login result containing the session token and user info.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user_id: String,
    pub session_token: String,
    pub user_info: UserInfo,
}

#[derive(Debug, Clone)]
pub struct LogoutResult {
    pub success: bool,
    pub message: String,
}

/// Endpoint recorded in the access log on a successful login.
pub const LOGIN_ENDPOINT: &str = "/auth/login/";

/// Appended to the latest access log entry on logout.
pub const LOGOUT_MARKER: &str = " - User logged out.";

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and returns the session token and user info.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserNotFound`] for an unknown email and
    /// [`AuthError::InvalidPassword`] when the password does not match.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError>;

    /// Marks the caller's latest access log entry as logged out.
    /// Database failures are reported in the result, not as an error.
    async fn logout(&self, user_id: Option<&str>) -> LogoutResult;
}
