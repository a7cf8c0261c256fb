use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::sea_orm_active_enums::UserRole;
use crate::entities::{access_logs, profiles, users};

use super::profile::Profile;

/// User data returned from repository (without sensitive password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: String,
    pub updated_at: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            role: model.role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Fields needed to create a user together with its first profile.
#[derive(Debug, Clone)]
pub struct NewAccount<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get user by exact email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user by email")?;

        Ok(user.map(User::from))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = users::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    /// Get user together with its oldest profile, if any
    pub async fn get_with_first_profile(&self, id: &str) -> Result<Option<(User, Option<Profile>)>> {
        let Some(user) = users::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?
        else {
            return Ok(None);
        };

        let profile = user
            .find_related(profiles::Entity)
            .order_by_asc(profiles::Column::CreatedAt)
            .one(&self.conn)
            .await
            .context("Failed to query profile for user")?;

        Ok(Some((User::from(user), profile.map(Profile::from))))
    }

    /// Hashes the password and inserts the user and its profile in one transaction.
    pub async fn create_with_profile(
        &self,
        account: &NewAccount<'_>,
        config: &SecurityConfig,
    ) -> Result<User> {
        let password = account.password.to_string();
        let config = config.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password, &config))
            .await
            .context("Password hashing task panicked")??;

        let now = chrono::Utc::now().to_rfc3339();
        let user_id = uuid::Uuid::new_v4().to_string();

        let txn = self.conn.begin().await?;

        let user = users::ActiveModel {
            id: Set(user_id.clone()),
            email: Set(account.email.to_string()),
            password: Set(password_hash),
            role: Set(UserRole::User),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        }
        .insert(&txn)
        .await
        .context("Failed to insert user")?;

        profiles::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(user_id),
            first_name: Set(account.first_name.map(str::to_string)),
            last_name: Set(account.last_name.map(str::to_string)),
            bio: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .context("Failed to insert profile")?;

        txn.commit().await?;

        Ok(User::from(user))
    }

    /// Delete a user with its profiles and access logs. Returns `false` when no user matched.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let txn = self.conn.begin().await?;

        profiles::Entity::delete_many()
            .filter(profiles::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .context("Failed to delete profiles")?;

        access_logs::Entity::delete_many()
            .filter(access_logs::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .context("Failed to delete access logs")?;

        let result = users::Entity::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .context("Failed to delete user")?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Update the email of a user. Returns `None` when no user matched.
    pub async fn update_email(&self, id: &str, email: &str) -> Result<Option<User>> {
        let Some(user) = users::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user for email update")?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().to_rfc3339();

        let mut active: users::ActiveModel = user.into();
        active.email = Set(email.to_string());
        active.updated_at = Set(now);
        let updated = active.update(&self.conn).await?;

        Ok(Some(User::from(updated)))
    }

    /// Verify password for a user.
    /// Returns `None` when the email is unknown.
    /// Note: This uses `spawn_blocking` because Argon2 hashing is CPU-intensive
    /// and would block the async runtime if run directly.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<Option<bool>> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user for password verification")?;

        let Some(user) = user else {
            return Ok(None);
        };

        let password_hash = user.password;
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .context("Password verification task panicked")??;

        Ok(Some(is_valid))
    }

    /// Raw stored hash, for tests and diagnostics.
    pub async fn get_password_hash(&self, id: &str) -> Result<Option<String>> {
        let user = users::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user password hash")?;

        Ok(user.map(|u| u.password))
    }

    pub async fn count_by_email(&self, email: &str) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.conn)
            .await
            .context("Failed to count users by email")
    }
}

/// Hash a password using Argon2id with the configured cost params.
pub fn hash_password(password: &str, config: &SecurityConfig) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let params = Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None, // output length (use default)
    )
    .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

/// Verify a password against a PHC hash string. The params are read from the hash itself.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> SecurityConfig {
        SecurityConfig {
            argon2_memory_cost_kib: 64,
            argon2_time_cost: 1,
            ..SecurityConfig::default()
        }
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hash = hash_password("hunter22", &fast_config()).unwrap();
        assert_ne!(hash, "hunter22");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_uses_configured_cost() {
        let hash = hash_password("hunter22", &fast_config()).unwrap();
        assert!(hash.contains("m=64,t=1,p=1"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same", &fast_config()).unwrap();
        let b = hash_password("same", &fast_config()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("correct horse", &fast_config()).unwrap();
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
