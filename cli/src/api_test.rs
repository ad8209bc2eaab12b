use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::json;

use super::*;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

#[test]
fn url_joins_without_double_slashes() {
    let api = ApiClient::new("http://127.0.0.1:8000/api/v1/", None);
    assert_eq!(api.url("/gov/institutions?type=Ministry"), "http://127.0.0.1:8000/api/v1/gov/institutions?type=Ministry");
    assert_eq!(api.url("health"), "http://127.0.0.1:8000/api/v1/health");
}

#[test]
fn blank_token_is_ignored() {
    let api = ApiClient::new("http://x", Some("  ".to_owned()));
    assert!(api.token.is_none());
}

#[test]
fn empty_body_parses_as_null() {
    assert_eq!(parse_body("  ").unwrap(), Value::Null);
    assert_eq!(parse_body(r#"{"ok":true}"#).unwrap(), json!({ "ok": true }));
    assert!(matches!(parse_body("not json"), Err(CliError::InvalidJson(_))));
}

#[tokio::test]
async fn sends_bearer_token() {
    let router = Router::new().route(
        "/api/v1/reviews",
        get(|headers: HeaderMap| async move {
            let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
            axum::Json(json!([{ "auth": auth }]))
        }),
    );
    let api = ApiClient::new(&serve(router).await, Some("tok".to_owned()));
    let body = api.get("/reviews").await.unwrap();
    assert_eq!(body[0]["auth"], "Bearer tok");
}

#[tokio::test]
async fn error_status_carries_backend_detail() {
    let router = Router::new().route(
        "/api/v1/citizen/token",
        post(|| async { (StatusCode::UNAUTHORIZED, axum::Json(json!({ "detail": "Incorrect email or password" }))) }),
    );
    let api = ApiClient::new(&serve(router).await, None);
    let err = api.post_form("/citizen/token", "username=a&password=b".to_owned()).await.unwrap_err();
    match err {
        CliError::Status { status, detail } => {
            assert_eq!(status, 401);
            assert_eq!(detail, "Incorrect email or password");
        }
        other => panic!("unexpected error: {other}"),
    }
}
