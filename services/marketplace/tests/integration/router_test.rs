use std::time::Duration;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use serde_json::{Value, json};

use quickclick_auth_types::identity::JwtSecret;
use quickclick_domain::user::Role;
use quickclick_marketplace::infra::oauth2::{GOOGLE_USERINFO_URL, HttpOAuth2Client};
use quickclick_marketplace::router::build_router;
use quickclick_marketplace::state::AppState;
use quickclick_marketplace_schema::image_data;
use quickclick_testing::auth::{MockAuth, TEST_JWT_SECRET};

const BODY_LIMIT: usize = 1024 * 1024;

fn server_with(db: DatabaseConnection, max_body_bytes: usize) -> TestServer {
    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        access_token_ttl_secs: 600,
        oauth2_client: HttpOAuth2Client::new(GOOGLE_USERINFO_URL, Duration::from_secs(1))
            .unwrap(),
    };
    TestServer::new(build_router(state, "/v1.0", max_body_bytes)).unwrap()
}

/// Router without a database. Only usable for requests rejected before the
/// store is reached; running a query on this connection panics.
fn server() -> TestServer {
    server_with(DatabaseConnection::Disconnected, BODY_LIMIT)
}

fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

#[tokio::test]
async fn should_answer_liveness_and_fail_readiness_without_database() {
    let server = server();

    server.get("/healthz").await.assert_status_ok();
    let response = server.get("/readyz").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_require_bearer_to_register_advert() {
    let response = server()
        .post("/v1.0/adverts")
        .json(&json!({ "title": "Big dog", "category": "TOYS", "price": 100 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_advert_without_title_before_touching_store() {
    let (name, value) = MockAuth::user(1, "alice@example.com").header();
    let response = server()
        .post("/v1.0/adverts")
        .add_header(name, value)
        .json(&json!({
            "description": "a toy",
            "category": "TOYS",
            "price": 100,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "MISSING_FIELDS");
    assert_eq!(body["message"], "Please fill all fields");
}

#[tokio::test]
async fn should_forbid_admin_token_from_registering_advert() {
    let (name, value) = MockAuth::new(2, "admin@example.com", Role::Admin).header();
    let response = server()
        .post("/v1.0/adverts")
        .add_header(name, value)
        .json(&json!({ "title": "Big dog", "description": "a toy", "category": "TOYS", "price": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_reject_unknown_category_path() {
    let response = server().get("/v1.0/adverts/category/bogus").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "INVALID_ARGUMENT");
    assert_eq!(body["message"], "There is no such category: bogus");
}

#[tokio::test]
async fn should_wrap_unparsable_path_id_in_envelope() {
    let server = server();

    for path in ["/v1.0/adverts/abc", "/v1.0/adverts/5/images/xyz"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{path}");
        let body = response.json::<Value>();
        assert_eq!(body["kind"], "INVALID_ARGUMENT", "{path}");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn should_wrap_oversized_body_in_envelope() {
    let response = server_with(DatabaseConnection::Disconnected, 64)
        .post("/v1.0/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "x".repeat(256) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.json::<Value>()["kind"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn should_reject_unsupported_oauth2_provider() {
    let response = server()
        .post("/v1.0/auth/oauth2/facebook")
        .json(&json!({ "access_token": "whatever" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Sorry! Login with facebook is not supported yet.");
}

#[tokio::test]
async fn should_hide_store_failure_details() {
    let db = mock_db()
        .append_query_errors([DbErr::Custom("relation \"adverts\" does not exist".to_owned())])
        .into_connection();
    let response = server_with(db, BODY_LIMIT).get("/v1.0/adverts").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["message"], "an unexpected error occurred");
}

#[tokio::test]
async fn should_serve_image_bytes_with_nosniff() {
    let db = mock_db()
        .append_query_results([vec![image_data::Model {
            id: 1,
            advert_id: 5,
            name: "dog.png".to_owned(),
            content_type: "image/png".to_owned(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
            created_date: Utc::now(),
        }]])
        .into_connection();
    let response = server_with(db, BODY_LIMIT)
        .get("/v1.0/adverts/5/images/1")
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "inline; filename=\"dog.png\""
    );
    assert_eq!(response.as_bytes().as_ref(), &[0x89, 0x50, 0x4e, 0x47]);
}

#[tokio::test]
async fn should_stamp_request_id_on_responses() {
    let response = server().get("/healthz").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_not_serve_api_outside_prefix() {
    let response = server().get("/adverts").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
