use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{any, get};
use serde_json::{Value, json};

use super::*;
use crate::config::ServerConfig;

fn config(frappe_url: String, proxy_timeout_secs: u64) -> ServerConfig {
    ServerConfig {
        port: 0,
        frappe_url,
        tenant_name: "Test School".to_owned(),
        proxy_timeout_secs,
        search_debounce_ms: 300,
        search_min_chars: 3,
        page_size_options: vec![20, 50],
    }
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let mut out = HeaderMap::new();
    out.append("set-cookie", HeaderValue::from_static("sid=abc; Path=/"));
    out.append("set-cookie", HeaderValue::from_static("user_id=admin; Path=/"));
    out.append("x-upstream", HeaderValue::from_static("1"));
    (
        out,
        axum::Json(json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "cookie": header("cookie"),
            "secret": header("x-internal-secret"),
            "body": String::from_utf8_lossy(&body),
        })),
    )
}

async fn forbidden() -> impl IntoResponse {
    (StatusCode::FORBIDDEN, axum::Json(json!({ "exc_type": "PermissionError" })))
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "late"
}

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/api/method/forbidden", get(forbidden))
        .route("/api/method/slow", get(slow))
        .route("/api/{*path}", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn call(state: AppState, method: Method, uri: &str, headers: HeaderMap, body: &str) -> Response {
    match forward(State(state), method, uri.parse().unwrap(), headers, Bytes::from(body.to_owned())).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn upstream_url_joins_base_path_and_query() {
    assert_eq!(
        upstream_url("https://erp.test/", "/api/resource/Student", Some("limit_start=20")).unwrap(),
        "https://erp.test/api/resource/Student?limit_start=20"
    );
    assert_eq!(
        upstream_url("https://erp.test", "/api/method/logout", Some("")).unwrap(),
        "https://erp.test/api/method/logout"
    );
}

#[test]
fn upstream_url_rejects_paths_outside_api() {
    assert!(matches!(upstream_url("http://erp", "/app/student", None), Err(ProxyError::InvalidPath(_))));
    assert!(matches!(upstream_url("http://erp", "/api/../private", None), Err(ProxyError::InvalidPath(_))));
}

#[test]
fn upstream_url_rejects_percent_encoded_dot_segments() {
    for path in [
        "/api/%2e%2e/private/files/secret.pdf",
        "/api/.%2e/private",
        "/api/%2E./private",
        "/api/%2E%2E/private",
        "/api/resource/%2e/Student",
    ] {
        assert!(
            matches!(upstream_url("http://backend", path, None), Err(ProxyError::InvalidPath(_))),
            "{path} was accepted"
        );
    }
}

#[test]
fn upstream_url_stays_under_backend_api_root() {
    let url = upstream_url("http://backend/erp/", "/api/resource/Student", Some("limit=20")).unwrap();
    assert_eq!(url, "http://backend/erp/api/resource/Student?limit=20");
    assert!(reqwest::Url::parse(&url).unwrap().path().starts_with("/erp/api/"));
}

#[test]
fn upstream_url_reports_unparseable_backend() {
    assert!(matches!(upstream_url("not a url", "/api/method/ping", None), Err(ProxyError::Upstream(_))));
}

#[test]
fn header_whitelists_are_case_insensitive() {
    assert!(is_forwarded_request_header("Cookie"));
    assert!(is_forwarded_request_header("content-type"));
    assert!(!is_forwarded_request_header("host"));
    assert!(!is_forwarded_request_header("x-internal-secret"));
    assert!(is_forwarded_response_header("Set-Cookie"));
    assert!(!is_forwarded_response_header("content-length"));
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".to_owned()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::InvalidPath("/x".to_owned()).status(), StatusCode::BAD_REQUEST);
}

// =============================================================
// Forwarding
// =============================================================

#[tokio::test]
async fn forward_replays_method_query_body_and_whitelisted_headers() {
    let state = AppState::new(config(spawn_upstream().await, 5)).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert("cookie", HeaderValue::from_static("sid=abc"));
    headers.insert("x-internal-secret", HeaderValue::from_static("nope"));

    let resp = call(state, Method::POST, "/api/method/login?x=1", headers, r#"{"usr":"a"}"#).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookies: Vec<_> = resp.headers().get_all("set-cookie").iter().collect();
    assert_eq!(cookies.len(), 2);
    assert!(resp.headers().get("x-upstream").is_none());

    let body = json_body(resp).await;
    assert_eq!(body["method"], "POST");
    assert_eq!(body["uri"], "/api/method/login?x=1");
    assert_eq!(body["cookie"], "sid=abc");
    assert_eq!(body["secret"], Value::Null);
    assert_eq!(body["body"], r#"{"usr":"a"}"#);
}

#[tokio::test]
async fn forward_passes_backend_error_statuses_through() {
    let state = AppState::new(config(spawn_upstream().await, 5)).unwrap();
    let resp = call(state, Method::GET, "/api/method/forbidden", HeaderMap::new(), "").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(resp).await["exc_type"], "PermissionError");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = AppState::new(config(format!("http://{addr}"), 5)).unwrap();
    let resp = call(state, Method::GET, "/api/resource/Student", HeaderMap::new(), "").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body = json_body(resp).await;
    assert_eq!(body["exc_type"], "ProxyError");
    let envelope: ErrorEnvelope = serde_json::from_value(body).unwrap();
    assert!(envelope.summary().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let state = AppState::new(config(spawn_upstream().await, 1)).unwrap();
    let resp = call(state, Method::GET, "/api/method/slow", HeaderMap::new(), "").await;
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn non_api_path_is_rejected_without_upstream_call() {
    let state = AppState::new(config("http://127.0.0.1:1".to_owned(), 1)).unwrap();
    let resp = call(state, Method::GET, "/api/../etc/passwd", HeaderMap::new(), "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn encoded_dot_segments_never_reach_upstream() {
    let state = AppState::new(config(spawn_upstream().await, 5)).unwrap();
    let resp = call(state, Method::GET, "/api/%2e%2e/private/files/secret.pdf", HeaderMap::new(), "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["exc_type"], "ProxyError");
}
