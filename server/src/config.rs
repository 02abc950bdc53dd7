//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so either source works.
//! Parsing goes through a lookup function so tests never touch the process
//! environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use schooldesk_client::config::{
    ClientConfig, DEFAULT_PAGE_SIZE_OPTIONS, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SEARCH_MIN_CHARS, DEFAULT_TENANT_NAME,
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream document backend, without a trailing slash.
    pub frappe_url: String,
    pub tenant_name: String,
    pub proxy_timeout_secs: u64,
    pub search_debounce_ms: u32,
    pub search_min_chars: usize,
    pub page_size_options: Vec<u32>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `FRAPPE_URL`: `http://` or `https://` base URL of the backend
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TENANT_NAME`: default `SchoolDesk`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `SEARCH_DEBOUNCE_MS`: default 300
    /// - `SEARCH_MIN_CHARS`: default 3
    /// - `PAGE_SIZE_OPTIONS`: comma-separated, default `20,50,100,1000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing `FRAPPE_URL` or any malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let frappe_url = get("FRAPPE_URL").ok_or(ConfigError::Missing { var: "FRAPPE_URL" })?;
        if !(frappe_url.starts_with("http://") || frappe_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "FRAPPE_URL",
                value: frappe_url,
                reason: "expected an http:// or https:// URL".to_owned(),
            });
        }
        let frappe_url = frappe_url.trim_end_matches('/').to_owned();

        let page_size_options = match get("PAGE_SIZE_OPTIONS") {
            Some(raw) => parse_page_sizes(&raw)?,
            None => DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        };

        Ok(Self {
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            frappe_url,
            tenant_name: get("TENANT_NAME").unwrap_or_else(|| DEFAULT_TENANT_NAME.to_owned()),
            proxy_timeout_secs: parse_or("PROXY_TIMEOUT_SECS", get("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?,
            search_debounce_ms: parse_or("SEARCH_DEBOUNCE_MS", get("SEARCH_DEBOUNCE_MS"), DEFAULT_SEARCH_DEBOUNCE_MS)?,
            search_min_chars: parse_or("SEARCH_MIN_CHARS", get("SEARCH_MIN_CHARS"), DEFAULT_SEARCH_MIN_CHARS)?,
            page_size_options,
        })
    }

    #[must_use]
    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy_timeout_secs)
    }

    /// Settings handed to the browser. REST calls stay same-origin through
    /// the proxy, so the base URL is empty.
    #[must_use]
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            tenant_name: self.tenant_name.clone(),
            api_base_url: String::new(),
            search_debounce_ms: self.search_debounce_ms,
            search_min_chars: self.search_min_chars,
            page_size_options: self.page_size_options.clone(),
        }
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::Invalid { var, reason: e.to_string(), value }),
    }
}

fn parse_page_sizes(raw: &str) -> Result<Vec<u32>, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        var: "PAGE_SIZE_OPTIONS",
        value: raw.to_owned(),
        reason: reason.to_owned(),
    };
    let sizes = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>().map_err(|e| invalid(&e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.contains(&0) {
        return Err(invalid("page sizes must be positive"));
    }
    if sizes.windows(2).any(|w| w[0] >= w[1]) {
        return Err(invalid("page sizes must be strictly increasing"));
    }
    Ok(sizes)
}
