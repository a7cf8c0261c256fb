use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use imagemaker::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path =
        std::env::temp_dir().join(format!("imagemaker-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    // Keep hashing cheap in tests.
    config.security.argon2_memory_cost_kib = 64;
    config.security.argon2_time_cost = 1;

    let state = imagemaker::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    imagemaker::api::router(state).await
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Extractor rejections come back as plain text.
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}

async fn create_account(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/user/account/",
        Some(json!({
            "email": email,
            "password": password,
            "firstName": "Ada",
            "lastName": "Lovelace"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    body["userId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_account() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/user/account/",
        Some(json!({ "email": "ada@example.com", "password": "analytical" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["message"], "User account created successfully.");
    assert!(!body["userId"].as_str().unwrap().is_empty());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_a_500_with_message() {
    let app = spawn_app().await;
    create_account(&app, "dup@example.com", "first").await;

    let (status, body) = send(
        &app,
        "POST",
        "/user/account/",
        Some(json!({ "email": "dup@example.com", "password": "second" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "The provided email address is already associated with an existing account."
    );
}

#[tokio::test]
async fn test_login_flow() {
    let app = spawn_app().await;
    create_account(&app, "login@example.com", "s3cret").await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login/",
        Some(json!({ "email": "login@example.com", "password": "s3cret" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session_token"], "generated_session_token");
    assert_eq!(body["user_info"]["email"], "login@example.com");
    assert_eq!(body["user_info"]["name"], "Ada Lovelace");
    assert_eq!(body["user_info"]["role"], "USER");

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login/",
        Some(json!({ "email": "login@example.com", "password": "S3cret" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Invalid password");

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login/",
        Some(json!({ "email": "nobody@example.com", "password": "s3cret" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_logout_always_succeeds() {
    let app = spawn_app().await;
    let user_id = create_account(&app, "bye@example.com", "pw").await;

    send(
        &app,
        "POST",
        "/auth/login/",
        Some(json!({ "email": "bye@example.com", "password": "pw" })),
    )
    .await;

    let (status, body) = send(&app, "POST", &format!("/auth/logout/?user_id={user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User logged out successfully.");

    let (status, body) = send(&app, "POST", "/auth/logout/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_profile_read_and_update() {
    let app = spawn_app().await;
    let user_id = create_account(&app, "grace@example.com", "cobol").await;

    let (status, body) = send(&app, "GET", &format!("/user/profile/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], user_id.as_str());
    assert_eq!(body["email"], "grace@example.com");
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["role"], "USER");
    assert!(body["createdAt"].is_string());

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/user/profile/{user_id}/update"),
        Some(json!({
            "email": "hopper@example.com",
            "firstName": "Grace",
            "lastName": "Hopper",
            "bio": "Rear admiral"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user_id.as_str());
    assert_eq!(body["email"], "hopper@example.com");
    assert_eq!(body["firstName"], "Grace");
    assert_eq!(body["lastName"], "Hopper");
    assert_eq!(body["bio"], "Rear admiral");
    assert!(body["updatedAt"].is_string());

    let (_, body) = send(&app, "GET", &format!("/user/profile/{user_id}"), None).await;
    assert_eq!(body["email"], "hopper@example.com");
    assert_eq!(body["firstName"], "Grace");
}

#[tokio::test]
async fn test_unknown_profile_is_a_500() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/user/profile/does-not-exist", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_delete_account() {
    let app = spawn_app().await;
    let user_id = create_account(&app, "gone@example.com", "pw").await;

    let (status, body) = send(&app, "DELETE", &format!("/user/account/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("User account with ID {user_id} has been successfully deleted.")
    );

    let (status, body) = send(&app, "DELETE", &format!("/user/account/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Failed to delete user account with ID {user_id}.")
    );

    let (status, _) = send(&app, "GET", &format!("/user/profile/{user_id}"), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_generate_image() {
    let app = spawn_app().await;

    for text in ["a lighthouse at dusk", ""] {
        let (status, body) = send(
            &app,
            "POST",
            "/image/generate/",
            Some(json!({
                "text_description": text,
                "ai_model": "MIDJOURNEY",
                "style": "abstract"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "COMPLETED");
        assert_eq!(body["image_url"], "http://example.com/placeholder_image.png");
        assert_eq!(body["ai_model_used"], "MIDJOURNEY");
        assert_eq!(body["text_description_used"], text);
    }
}

#[tokio::test]
async fn test_generate_image_rejects_unknown_model() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/image/generate/",
        Some(json!({ "text_description": "cat", "ai_model": "PAINTBRUSH" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.as_str().unwrap().contains("PAINTBRUSH"));
}

#[tokio::test]
async fn test_list_models() {
    let app = spawn_app().await;

    for _ in 0..2 {
        let (status, body) = send(&app, "GET", "/ai/models/", None).await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = body["ai_models"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["DALL·E 2", "Imagen", "Midjourney", "Stable Diffusion"]);
    }
}

#[tokio::test]
async fn test_health_and_metrics() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()["x-content-type-options"],
        "nosniff"
    );
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/ai/models/")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn test_generate_image_for_unknown_user() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/image/generate/",
        Some(json!({
            "text_description": "a quiet street",
            "ai_model": "IMAGEN",
            "user_id": "no-such-user"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "COMPLETED");
}
