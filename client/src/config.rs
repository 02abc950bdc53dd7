//! Immutable client configuration injected at the root of the view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server derives this from its environment, provides it as Leptos context
//! during SSR, and embeds it in the HTML shell as a `<meta>` JSON payload. The
//! hydrate entry point parses that payload and provides the same value before
//! mounting, so both render passes read identical settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// `name` attribute of the `<meta>` tag carrying the serialized config.
pub const CONFIG_META_NAME: &str = "schooldesk-config";

pub const DEFAULT_TENANT_NAME: &str = "SchoolDesk";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_SEARCH_MIN_CHARS: usize = 3;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 4] = [20, 50, 100, 1000];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// School name shown in the shell and on the login card.
    pub tenant_name: String,
    /// Prefix for REST calls. Empty means same-origin (through the server proxy).
    pub api_base_url: String,
    pub search_debounce_ms: u32,
    pub search_min_chars: usize,
    pub page_size_options: Vec<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tenant_name: DEFAULT_TENANT_NAME.to_owned(),
            api_base_url: String::new(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            search_min_chars: DEFAULT_SEARCH_MIN_CHARS,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl ClientConfig {
    /// Parse the `<meta>` payload written by [`ClientConfig::to_meta_content`].
    ///
    /// # Errors
    ///
    /// Returns the serde error message when the payload is not valid JSON, and
    /// an error when the page size option list is empty or contains zero.
    pub fn from_meta_content(raw: &str) -> Result<Self, String> {
        let mut config: Self = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        if config.page_size_options.is_empty() {
            return Err("page_size_options must not be empty".to_owned());
        }
        if config.page_size_options.contains(&0) {
            return Err("page_size_options must be positive".to_owned());
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_owned();
        Ok(config)
    }

    #[must_use]
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Absolute or same-origin URL for an API path such as `/api/resource/Student`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }

    /// Read the configuration embedded in the current document.
    ///
    /// Falls back to defaults when the tag is missing or malformed.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        match content.map(|raw| Self::from_meta_content(&raw)) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("ignoring malformed client config: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}
