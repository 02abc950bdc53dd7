//! Session DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! List payloads come from the shared `doclist` crate; only the auth method
//! shapes live here because nothing else needs them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use doclist::{ListError, ListQuery, MethodEnvelope, Record};

/// Message the login method returns on success.
pub const LOGGED_IN_MESSAGE: &str = "Logged In";

/// Identity the backend reports for anonymous sessions.
pub const GUEST_USER: &str = "Guest";

/// Signed-in user as reported by the session probe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Login identifier, usually an email address.
    pub id: String,
}

/// Body of `POST /api/method/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub usr: &'a str,
    pub pwd: &'a str,
}

/// Map the session probe's message to a user, treating `Guest` as signed out.
#[must_use]
pub fn session_user_from_message(message: &str) -> Option<SessionUser> {
    let id = message.trim();
    if id.is_empty() || id == GUEST_USER {
        return None;
    }
    Some(SessionUser { id: id.to_owned() })
}

/// Whether a login response body reports success.
#[must_use]
pub fn is_logged_in(body: &MethodEnvelope<String>) -> bool {
    body.message == LOGGED_IN_MESSAGE
}
