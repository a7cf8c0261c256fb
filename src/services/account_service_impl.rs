//! `SeaORM` implementation of the `AccountService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{NewAccount, Store};
use crate::services::account_service::{
    AccountError, AccountService, CreateAccount, CreatedAccount, DeleteOutcome,
};

pub struct SeaOrmAccountService {
    store: Store,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmAccountService {
    #[must_use]
    pub const fn new(store: Store, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl AccountService for SeaOrmAccountService {
    async fn create_account(&self, request: CreateAccount) -> Result<CreatedAccount, AccountError> {
        if self.store.get_user_by_email(&request.email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let security = self.config.read().await.security.clone();

        let account = NewAccount {
            email: &request.email,
            password: &request.password,
            first_name: request.first_name.as_deref(),
            last_name: request.last_name.as_deref(),
        };

        let user = self
            .store
            .create_user_with_profile(&account, &security)
            .await?;

        info!(user_id = %user.id, "User account created");

        Ok(CreatedAccount {
            user_id: user.id,
            email: user.email,
            message: "User account created successfully.".to_string(),
        })
    }

    async fn delete_account(&self, id: &str) -> DeleteOutcome {
        match self.store.delete_user(id).await {
            Ok(true) => {
                info!(user_id = %id, "User account deleted");
                DeleteOutcome {
                    deleted: true,
                    message: format!("User account with ID {id} has been successfully deleted."),
                }
            }
            Ok(false) => {
                warn!(user_id = %id, "Delete requested for unknown user");
                failed_delete(id)
            }
            Err(e) => {
                warn!(user_id = %id, error = %e, "Failed to delete user account");
                failed_delete(id)
            }
        }
    }
}

fn failed_delete(id: &str) -> DeleteOutcome {
    DeleteOutcome {
        deleted: false,
        message: format!("Failed to delete user account with ID {id}."),
    }
}
