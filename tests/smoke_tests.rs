use imagemaker::config::Config;
use imagemaker::entities::sea_orm_active_enums::{AiModel, ImageRequestStatus};
use imagemaker::services::{CreateAccount, GenerateImage, UpdateProfile};
use imagemaker::state::SharedState;

async fn shared_state() -> SharedState {
    let db_path =
        std::env::temp_dir().join(format!("imagemaker-smoke-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.security.argon2_memory_cost_kib = 64;
    config.security.argon2_time_cost = 1;

    SharedState::new(config)
        .await
        .expect("Failed to create shared state")
}

fn account(email: &str, password: &str) -> CreateAccount {
    CreateAccount {
        email: email.to_string(),
        password: password.to_string(),
        first_name: Some("Alan".to_string()),
        last_name: Some("Turing".to_string()),
    }
}

#[tokio::test]
async fn test_duplicate_email_leaves_one_user() {
    let state = shared_state().await;

    state
        .account_service
        .create_account(account("enigma@example.com", "bombe"))
        .await
        .unwrap();

    let err = state
        .account_service
        .create_account(account("enigma@example.com", "other"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already associated"));

    let count = state
        .store
        .count_users_with_email("enigma@example.com")
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let state = shared_state().await;

    let created = state
        .account_service
        .create_account(account("hash@example.com", "plaintext"))
        .await
        .unwrap();

    let hash = state
        .store
        .get_user_password_hash(&created.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(hash, "plaintext");
    assert!(hash.starts_with("$argon2id$"));

    assert_eq!(
        state
            .store
            .verify_user_password("hash@example.com", "plaintext")
            .await
            .unwrap(),
        Some(true)
    );
    assert_eq!(
        state
            .store
            .verify_user_password("hash@example.com", "Plaintext")
            .await
            .unwrap(),
        Some(false)
    );
}

#[tokio::test]
async fn test_account_starts_with_one_profile() {
    let state = shared_state().await;

    let created = state
        .account_service
        .create_account(CreateAccount {
            email: "bare@example.com".to_string(),
            password: "pw".to_string(),
            first_name: None,
            last_name: None,
        })
        .await
        .unwrap();

    assert_eq!(state.store.count_profiles(&created.user_id).await.unwrap(), 1);

    let profile = state
        .profile_service
        .get_profile(&created.user_id)
        .await
        .unwrap();
    assert_eq!(profile.first_name, None);
    assert_eq!(profile.last_name, None);

    // Without a name the login falls back to the email.
    let login = state.auth_service.login("bare@example.com", "pw").await.unwrap();
    assert_eq!(login.user_info.name, "bare@example.com");
}

#[tokio::test]
async fn test_delete_removes_profiles_and_access_logs() {
    let state = shared_state().await;

    let created = state
        .account_service
        .create_account(account("delete@example.com", "pw"))
        .await
        .unwrap();
    state
        .auth_service
        .login("delete@example.com", "pw")
        .await
        .unwrap();

    let outcome = state.account_service.delete_account(&created.user_id).await;
    assert!(outcome.deleted);

    assert!(state.store.get_user_by_id(&created.user_id).await.unwrap().is_none());
    assert_eq!(state.store.count_profiles(&created.user_id).await.unwrap(), 0);
    assert!(
        state
            .store
            .list_access_logs(&created.user_id)
            .await
            .unwrap()
            .is_empty()
    );

    let outcome = state.account_service.delete_account(&created.user_id).await;
    assert!(!outcome.deleted);
}

#[tokio::test]
async fn test_logout_marks_latest_login() {
    let state = shared_state().await;

    let created = state
        .account_service
        .create_account(account("session@example.com", "pw"))
        .await
        .unwrap();

    state.auth_service.login("session@example.com", "pw").await.unwrap();
    state.auth_service.login("session@example.com", "pw").await.unwrap();

    let result = state.auth_service.logout(Some(created.user_id.as_str())).await;
    assert!(result.success);

    let logs = state.store.list_access_logs(&created.user_id).await.unwrap();
    assert_eq!(logs.len(), 2);

    let marked: Vec<_> = logs
        .iter()
        .filter(|log| log.endpoint == "/auth/login/ - User logged out.")
        .collect();
    assert_eq!(marked.len(), 1);

    let latest = state
        .store
        .latest_access(&created.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, marked[0].id);
}

#[tokio::test]
async fn test_failed_login_is_not_logged() {
    let state = shared_state().await;

    let created = state
        .account_service
        .create_account(account("quiet@example.com", "pw"))
        .await
        .unwrap();

    assert!(state.auth_service.login("quiet@example.com", "nope").await.is_err());
    assert!(
        state
            .store
            .list_access_logs(&created.user_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_profile_update_rejects_taken_email() {
    let state = shared_state().await;

    state
        .account_service
        .create_account(account("first@example.com", "pw"))
        .await
        .unwrap();
    let second = state
        .account_service
        .create_account(account("second@example.com", "pw"))
        .await
        .unwrap();

    let update = |email: &str| UpdateProfile {
        email: email.to_string(),
        first_name: "Joan".to_string(),
        last_name: "Clarke".to_string(),
        bio: None,
    };

    assert!(
        state
            .profile_service
            .update_profile(&second.user_id, update("first@example.com"))
            .await
            .is_err()
    );

    // Keeping your own email is not a conflict.
    let updated = state
        .profile_service
        .update_profile(&second.user_id, update("second@example.com"))
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Joan");
}

#[tokio::test]
async fn test_generated_image_is_persisted() {
    let state = shared_state().await;

    let generated = state
        .image_service
        .generate(GenerateImage {
            user_id: None,
            text_description: "a fox in the snow".to_string(),
            ai_model: AiModel::StableDiffusion,
            theme: Some("winter".to_string()),
            style: None,
        })
        .await
        .unwrap();

    assert_eq!(generated.status, ImageRequestStatus::Completed);
    assert!(!generated.image_url.is_empty());

    let stored = state
        .store
        .get_image_request(&generated.request_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ImageRequestStatus::Completed);
    assert_eq!(stored.ai_model, AiModel::StableDiffusion);
    assert_eq!(stored.theme.as_deref(), Some("winter"));
    assert_eq!(stored.image_url.as_deref(), Some(generated.image_url.as_str()));
}

#[tokio::test]
async fn test_unknown_owner_still_completes() {
    let state = shared_state().await;

    let generated = state
        .image_service
        .generate(GenerateImage {
            user_id: Some("no-such-user".to_string()),
            text_description: "a paper crane".to_string(),
            ai_model: AiModel::Dalle2,
            theme: None,
            style: None,
        })
        .await
        .unwrap();

    assert_eq!(generated.status, ImageRequestStatus::Completed);

    let stored = state
        .store
        .get_image_request(&generated.request_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, None);
}

#[tokio::test]
async fn test_image_request_outlives_its_owner() {
    let state = shared_state().await;

    let created = state
        .account_service
        .create_account(account("owner@example.com", "pw"))
        .await
        .unwrap();

    let generated = state
        .image_service
        .generate(GenerateImage {
            user_id: Some(created.user_id.clone()),
            text_description: "a harbour at night".to_string(),
            ai_model: AiModel::Imagen,
            theme: None,
            style: Some("photorealism".to_string()),
        })
        .await
        .unwrap();

    let stored = state
        .store
        .get_image_request(&generated.request_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id.as_deref(), Some(created.user_id.as_str()));

    let outcome = state.account_service.delete_account(&created.user_id).await;
    assert!(outcome.deleted);

    let stored = state
        .store
        .get_image_request(&generated.request_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, None);
    assert_eq!(stored.status, ImageRequestStatus::Completed);
}
