//! Networking for the document API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls (list, login, logout, session probe) and
//! `types` defines the session DTOs and re-exports the `doclist` wire model.

pub mod api;
pub mod types;
