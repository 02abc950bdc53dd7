//! Same-origin reverse proxy to the document backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/api/*` on this server; requests are replayed against
//! `FRAPPE_URL` with a whitelisted set of headers so the backend's session
//! cookie lives on our origin. Upstream failures become 502, timeouts 504,
//! both with an error body the client already knows how to read.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use doclist::ErrorEnvelope;

use crate::state::AppState;

const FORWARDED_REQUEST_HEADERS: &[&str] = &[
    "accept",
    "accept-language",
    "authorization",
    "content-type",
    "cookie",
    "x-frappe-csrf-token",
    "x-requested-with",
];

const FORWARDED_RESPONSE_HEADERS: &[&str] = &["cache-control", "content-type", "set-cookie"];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid proxy path: {0}")]
    InvalidPath(String),

    #[error("upstream timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            exc_type: Some("ProxyError".to_owned()),
            message: Some(serde_json::Value::String(self.to_string())),
            ..ErrorEnvelope::default()
        };
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Whether a browser request header is replayed upstream.
#[must_use]
pub fn is_forwarded_request_header(name: &str) -> bool {
    FORWARDED_REQUEST_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Whether an upstream response header is returned to the browser.
#[must_use]
pub fn is_forwarded_response_header(name: &str) -> bool {
    FORWARDED_RESPONSE_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Whether a path segment is `.` or `..`, literally or percent-encoded.
fn is_dot_segment(seg: &str) -> bool {
    let decoded = seg.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Upstream URL for a proxied `/api/...` path and optional raw query.
///
/// The returned URL is the normalized form the HTTP client will send, and its
/// path is guaranteed to stay under the backend's `/api/`.
///
/// # Errors
///
/// Returns [`ProxyError::InvalidPath`] for paths outside `/api/` or with
/// dot segments, and [`ProxyError::Upstream`] when `base` is not a URL.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    if !path.starts_with("/api/") || path.split('/').any(is_dot_segment) {
        return Err(ProxyError::InvalidPath(path.to_owned()));
    }
    let base_url = reqwest::Url::parse(base).map_err(|e| ProxyError::Upstream(format!("invalid backend url: {e}")))?;
    let api_root = format!("{}/api/", base_url.path().trim_end_matches('/'));

    let base = base.trim_end_matches('/');
    let joined = match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}{path}?{q}"),
        None => format!("{base}{path}"),
    };
    let url = reqwest::Url::parse(&joined).map_err(|_| ProxyError::InvalidPath(path.to_owned()))?;
    if !url.path().starts_with(&api_root) {
        return Err(ProxyError::InvalidPath(path.to_owned()));
    }
    Ok(url.into())
}

fn filter_headers(headers: &HeaderMap, keep: fn(&str) -> bool) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        if keep(name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Replay one `/api/*` request against the backend.
///
/// # Errors
///
/// Returns [`ProxyError`] when the path is rejected or the upstream call
/// fails; backend error statuses pass through unchanged.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.frappe_url, uri.path(), uri.query())?;

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, is_forwarded_request_header))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from_reqwest(&e);
            tracing::warn!(%method, path = uri.path(), error = %err, "proxy request failed");
            err
        })?;

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), is_forwarded_response_header);
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::from_reqwest(&e))?;

    if status.is_server_error() {
        tracing::warn!(%method, path = uri.path(), %status, "upstream error status");
    } else {
        tracing::debug!(%method, path = uri.path(), %status, "proxied");
    }
    Ok((status, response_headers, bytes).into_response())
}
