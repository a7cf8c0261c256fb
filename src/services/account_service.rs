//! Domain service for creating and deleting user accounts.

use thiserror::Error;

/// Errors specific to account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("The provided email address is already associated with an existing account.")]
    EmailTaken,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AccountError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreatedAccount {
    pub user_id: String,
    pub email: String,
    pub message: String,
}

/// Outcome of a delete. Failures are reported here rather than as errors, and
/// "no such user" is indistinguishable from a database failure.
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub deleted: bool,
    pub message: String,
}

/// Domain service trait for account lifecycle.
#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    /// Creates a user and its profile.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::EmailTaken`] if the email is already registered.
    async fn create_account(&self, request: CreateAccount) -> Result<CreatedAccount, AccountError>;

    /// Deletes a user and its profiles. Never fails; see [`DeleteOutcome`].
    async fn delete_account(&self, id: &str) -> DeleteOutcome;
}
