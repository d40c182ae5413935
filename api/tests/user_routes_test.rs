use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{json, Value};

use mv_api::app::create_app;
use mv_api::dto::RegisterUserRequest;
use mv_api::routes::user::AppState;
use mv_core::domain::User;
use mv_core::repositories::{InMemoryUserRepository, UserRepository};
use mv_core::services::{VerificationNotifier, VerificationService};
use mv_shared::config::CorsConfig;

/// Notifier that keeps the last token sent to each user
#[derive(Default)]
struct CapturingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl CapturingNotifier {
    fn token_for(&self, username: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(u, _)| u == username)
            .map(|(_, t)| t.clone())
    }
}

#[async_trait]
impl VerificationNotifier for CapturingNotifier {
    async fn send_verification(
        &self,
        username: &str,
        _email: &str,
        token: &str,
    ) -> Result<String, String> {
        if self.fail {
            return Err("smtp relay refused connection".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((username.to_string(), token.to_string()));
        Ok("test-message".to_string())
    }

    fn provider_name(&self) -> &str {
        "capture"
    }
}

type TestState = AppState<InMemoryUserRepository, CapturingNotifier>;

fn create_test_app_state(
    notifier: CapturingNotifier,
) -> (web::Data<TestState>, Arc<InMemoryUserRepository>, Arc<CapturingNotifier>) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let notifier = Arc::new(notifier);
    let service = VerificationService::new(repository.clone(), notifier.clone());
    (web::Data::new(AppState::new(service)), repository, notifier)
}

fn register_request(username: &str, email: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: username.to_string(),
        email: email.to_string(),
    }
}

#[actix_web::test]
async fn test_register_verify_and_check() {
    let (state, _, notifier) = create_test_app_state(CapturingNotifier::default());
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(register_request("alice", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "User successfully registered" }));

    let req = test::TestRequest::get()
        .uri("/user/check-verification/alice")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "message": "User is not verified", "status": "not verified" })
    );

    let token = notifier.token_for("alice").unwrap();
    assert_eq!(token.len(), 6);

    let req = test::TestRequest::get()
        .uri(&format!("/user/verify-email/alice/{}", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "User successfully verified" }));

    let req = test::TestRequest::get()
        .uri("/user/check-verification/alice")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "message": "User is verified", "status": "verified" })
    );
}

#[actix_web::test]
async fn test_register_invalid_email() {
    let (state, repository, _) = create_test_app_state(CapturingNotifier::default());
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(register_request("alice", "not-an-email"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "statusCode": 400, "response": "email must be an email" })
    );
    assert!(repository.is_empty().await);
}

#[actix_web::test]
async fn test_register_missing_fields_lists_messages() {
    let (state, _, _) = create_test_app_state(CapturingNotifier::default());
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "statusCode": 400,
            "response": ["email must be an email", "username should not be empty"]
        })
    );
}

#[actix_web::test]
async fn test_register_blank_username() {
    let (state, repository, _) = create_test_app_state(CapturingNotifier::default());
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(register_request("   ", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "statusCode": 400, "response": "username should not be empty" })
    );
    assert!(repository.is_empty().await);
}

#[actix_web::test]
async fn test_register_conflicts() {
    let (state, _, _) = create_test_app_state(CapturingNotifier::default());
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(register_request("alice", "alice@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(register_request("alice", "other@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "statusCode": 409, "response": "User already exists with given username" })
    );

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(register_request("alice2", "alice@example.com"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "statusCode": 409, "response": "User already exists with given email" })
    );
}

#[actix_web::test]
async fn test_notification_failure_is_generic_500() {
    let (state, repository, _) = create_test_app_state(CapturingNotifier {
        fail: true,
        ..Default::default()
    });
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::post()
        .uri("/user/register")
        .set_json(register_request("alice", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "statusCode": 500, "response": "Internal Server Error" })
    );
    // The record stays pending
    assert!(repository.find_by_username("alice").await.unwrap().is_some());
}

#[actix_web::test]
async fn test_verify_email_error_order() {
    let (state, repository, _) = create_test_app_state(CapturingNotifier::default());
    repository
        .create(User::new(
            "bob".to_string(),
            "bob@example.com".to_string(),
            "AB12CD".to_string(),
        ))
        .await
        .unwrap();
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::get()
        .uri("/user/verify-email/ghost/AB12CD")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "statusCode": 404, "response": "User not found" }));

    let req = test::TestRequest::get()
        .uri("/user/verify-email/bob/ab12cd")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "statusCode": 400, "response": "Invalid verification token" })
    );

    let req = test::TestRequest::get()
        .uri("/user/verify-email/bob/AB12CD")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/user/verify-email/bob/WRONG1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "statusCode": 400, "response": "User already verified" })
    );
}

#[actix_web::test]
async fn test_check_verification_unknown_user() {
    let (state, _, _) = create_test_app_state(CapturingNotifier::default());
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::get()
        .uri("/user/check-verification/nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "statusCode": 404, "response": "User not found" }));
}

#[actix_web::test]
async fn test_health_endpoint() {
    let (state, _, _) = create_test_app_state(CapturingNotifier::default());
    let app = test::init_service(create_app(state, &CorsConfig::development(), 16 * 1024)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["store"]["status"], "healthy");
}
