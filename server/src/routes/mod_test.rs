use super::*;
use crate::config::ServerConfig;

fn state() -> AppState {
    let config = ServerConfig::from_lookup(|key| (key == "FRAPPE_URL").then(|| "http://127.0.0.1:1".to_owned()))
        .unwrap();
    AppState::new(config).unwrap()
}

async fn status_of(router: Router, method: &str, uri: &str) -> StatusCode {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    let url = format!("http://{addr}{uri}");
    let method = reqwest::Method::from_bytes(method.as_bytes()).unwrap();
    reqwest::Client::new().request(method, url).send().await.unwrap().status()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(status_of(api_routes(state()), "GET", "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn api_paths_reach_the_proxy() {
    // Port 1 refuses connections, so the proxy answers 502.
    let status = status_of(api_routes(state()), "DELETE", "/api/resource/Student/S1").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unknown_paths_are_not_proxied() {
    assert_eq!(status_of(api_routes(state()), "GET", "/apix").await, StatusCode::NOT_FOUND);
}
