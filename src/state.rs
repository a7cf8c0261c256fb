use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AccountService, AuthService, ImageGenerationService, ProfileService, SeaOrmAccountService,
    SeaOrmAuthService, SeaOrmImageGenerationService, SeaOrmProfileService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub account_service: Arc<dyn AccountService>,

    pub auth_service: Arc<dyn AuthService>,

    pub profile_service: Arc<dyn ProfileService>,

    pub image_service: Arc<dyn ImageGenerationService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let config = Arc::new(RwLock::new(config));

        let account_service = Arc::new(SeaOrmAccountService::new(store.clone(), config.clone()))
            as Arc<dyn AccountService + Send + Sync + 'static>;

        let auth_service = Arc::new(SeaOrmAuthService::new(store.clone(), config.clone()))
            as Arc<dyn AuthService + Send + Sync + 'static>;

        let profile_service = Arc::new(SeaOrmProfileService::new(store.clone()))
            as Arc<dyn ProfileService + Send + Sync + 'static>;

        let image_service = Arc::new(SeaOrmImageGenerationService::new(
            store.clone(),
            config.clone(),
        )) as Arc<dyn ImageGenerationService + Send + Sync + 'static>;

        Self {
            config,
            store,
            account_service,
            auth_service,
            profile_service,
            image_service,
        }
    }
}
