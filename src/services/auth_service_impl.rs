//! `SeaORM` implementation of the `AuthService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::Store;
use crate::services::auth_service::{
    AuthError, AuthService, LOGIN_ENDPOINT, LOGOUT_MARKER, LoginResult, LogoutResult, UserInfo,
};

pub struct SeaOrmAuthService {
    store: Store,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }

    async fn mark_logged_out(&self, user_id: &str) -> anyhow::Result<()> {
        if let Some(entry) = self.store.latest_access(user_id).await? {
            self.store
                .append_to_access_endpoint(entry, LOGOUT_MARKER)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let user = self
            .store
            .get_user_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Argon2 verification is constant-time with respect to the hash.
        let is_valid = self
            .store
            .verify_user_password(email, password)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !is_valid {
            warn!(user_id = %user.id, "Login rejected: invalid password");
            return Err(AuthError::InvalidPassword);
        }

        let profile = self.store.get_first_profile(&user.id).await?;

        self.store.record_access(&user.id, LOGIN_ENDPOINT).await?;

        let name = profile
            .and_then(|p| p.display_name())
            .unwrap_or_else(|| user.email.clone());

        let session_token = self.config.read().await.security.session_token.clone();

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            user_id: user.id,
            session_token,
            user_info: UserInfo {
                name,
                email: user.email,
                role: user.role,
            },
        })
    }

    async fn logout(&self, user_id: Option<&str>) -> LogoutResult {
        let outcome = match user_id {
            Some(id) => self.mark_logged_out(id).await,
            None => Ok(()),
        };

        match outcome {
            Ok(()) => LogoutResult {
                success: true,
                message: "User logged out successfully.".to_string(),
            },
            Err(e) => {
                warn!(error = %e, "Failed to log out");
                LogoutResult {
                    success: false,
                    message: format!("Failed to log out: {e}"),
                }
            }
        }
    }
}
