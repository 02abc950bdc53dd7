//! REST API helpers for the document backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so list and session
//! failures degrade to visible UI states without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use doclist::{ListError, ListQuery, Record};

use super::types::SessionUser;
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/api/method/login";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_PATH: &str = "/api/method/logout";
#[cfg(any(test, feature = "hydrate"))]
const LOGGED_USER_PATH: &str = "/api/method/frappe.auth.get_logged_user";

#[cfg(any(test, feature = "hydrate"))]
fn list_url(config: &ClientConfig, doctype: &str) -> String {
    config.api_url(&doclist::resource_path(doctype))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 | 403 => "Invalid credentials. Please try again.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Fetch one page of `doctype` documents.
///
/// # Errors
///
/// Returns [`ListError::Transport`] when the request cannot be sent,
/// [`ListError::Status`] for non-success responses and
/// [`ListError::Decode`] for malformed bodies.
pub async fn fetch_doc_list(config: &ClientConfig, doctype: &str, query: &ListQuery) -> Result<Vec<Record>, ListError> {
    #[cfg(feature = "hydrate")]
    {
        let url = list_url(config, doctype);
        let result = async {
            let resp = gloo_net::http::Request::get(&url)
                .query(query.to_query_pairs())
                .header("Accept", "application/json")
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ListError::Transport(e.to_string()))?;
            let body = resp.text().await.map_err(|e| ListError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ListError::from_response(resp.status(), &body));
            }
            doclist::ListEnvelope::decode(&body)
        }
        .await;
        if let Err(e) = &result {
            log::warn!("list {doctype} failed: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, doctype, query);
        Err(ListError::Transport("not available on server".to_owned()))
    }
}

/// Sign in with username (email) and password.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the backend does
/// not confirm the login.
pub async fn login(config: &ClientConfig, usr: &str, pwd: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { usr, pwd };
        let resp = gloo_net::http::Request::post(&config.api_url(LOGIN_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: doclist::MethodEnvelope<String> = resp.json().await.map_err(|e| e.to_string())?;
        if !super::types::is_logged_in(&body) {
            return Err(login_failed_message(401));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, usr, pwd);
        Err("not available on server".to_owned())
    }
}

/// Probe the current session. Returns `None` for guests, on failure, or on
/// the server.
pub async fn fetch_logged_user(config: &ClientConfig) -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.api_url(LOGGED_USER_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: doclist::MethodEnvelope<String> = resp.json().await.ok()?;
        super::types::session_user_from_message(&body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// End the current session.
pub async fn logout(config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(&config.api_url(LOGOUT_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
