use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;

pub mod migrator;
pub mod repositories;

pub use repositories::access_log::AccessLog;
pub use repositories::image_request::{ImageRequest, NewImageRequest};
pub use repositories::profile::{Profile, ProfileChanges};
pub use repositories::user::{NewAccount, User};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn profile_repo(&self) -> repositories::profile::ProfileRepository {
        repositories::profile::ProfileRepository::new(self.conn.clone())
    }

    fn image_request_repo(&self) -> repositories::image_request::ImageRequestRepository {
        repositories::image_request::ImageRequestRepository::new(self.conn.clone())
    }

    fn access_log_repo(&self) -> repositories::access_log::AccessLogRepository {
        repositories::access_log::AccessLogRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repo().get_by_email(email).await
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_with_profile(&self, id: &str) -> Result<Option<(User, Option<Profile>)>> {
        self.user_repo().get_with_first_profile(id).await
    }

    pub async fn create_user_with_profile(
        &self,
        account: &NewAccount<'_>,
        security: &SecurityConfig,
    ) -> Result<User> {
        self.user_repo().create_with_profile(account, security).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<bool> {
        self.user_repo().delete(id).await
    }

    pub async fn update_user_email(&self, id: &str, email: &str) -> Result<Option<User>> {
        self.user_repo().update_email(id, email).await
    }

    pub async fn verify_user_password(&self, email: &str, password: &str) -> Result<Option<bool>> {
        self.user_repo().verify_password(email, password).await
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    pub async fn get_first_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.profile_repo().first_for_user(user_id).await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        changes: &ProfileChanges<'_>,
    ) -> Result<Option<Profile>> {
        self.profile_repo().update_for_user(user_id, changes).await
    }

    // ========================================================================
    // Image requests
    // ========================================================================

    pub async fn create_image_request(&self, request: &NewImageRequest<'_>) -> Result<ImageRequest> {
        self.image_request_repo().create(request).await
    }

    pub async fn complete_image_request(
        &self,
        request: ImageRequest,
        image_url: &str,
    ) -> Result<ImageRequest> {
        self.image_request_repo().complete(request, image_url).await
    }

    // ========================================================================
    // Access logs
    // ========================================================================

    pub async fn record_access(&self, user_id: &str, endpoint: &str) -> Result<AccessLog> {
        self.access_log_repo().record(user_id, endpoint).await
    }

    pub async fn latest_access(&self, user_id: &str) -> Result<Option<AccessLog>> {
        self.access_log_repo().latest_for_user(user_id).await
    }

    pub async fn append_to_access_endpoint(
        &self,
        entry: AccessLog,
        suffix: &str,
    ) -> Result<AccessLog> {
        self.access_log_repo().append_to_endpoint(entry, suffix).await
    }

    // ========================================================================
    // Inspection
    //
    // Read-only lookups with no caller on the request path. Integration
    // tests use them to check what the services persisted.
    // ========================================================================

    pub async fn get_user_password_hash(&self, id: &str) -> Result<Option<String>> {
        self.user_repo().get_password_hash(id).await
    }

    pub async fn count_users_with_email(&self, email: &str) -> Result<u64> {
        self.user_repo().count_by_email(email).await
    }

    pub async fn count_profiles(&self, user_id: &str) -> Result<u64> {
        self.profile_repo().count_for_user(user_id).await
    }

    pub async fn get_image_request(&self, id: &str) -> Result<Option<ImageRequest>> {
        self.image_request_repo().get(id).await
    }

    pub async fn list_access_logs(&self, user_id: &str) -> Result<Vec<AccessLog>> {
        self.access_log_repo().list_for_user(user_id).await
    }
}
