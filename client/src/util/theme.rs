//! Light/dark theme preference.
//!
//! The chosen theme lands on `<html data-theme="...">` and is persisted under
//! [`THEME_STORAGE_KEY`]. Without a stored choice the system color scheme
//! decides. SSR renders the light theme; hydration applies the real one.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage;

pub const THEME_STORAGE_KEY: &str = "schooldesk_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognised means "no preference".
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle-button glyph: offers the opposite theme.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Stored preference, else the system color scheme.
pub fn read_preference() -> Theme {
    if let Some(theme) = storage::load_string(THEME_STORAGE_KEY).as_deref().and_then(Theme::from_stored) {
        return theme;
    }
    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if prefers_dark {
            return Theme::Dark;
        }
    }
    Theme::Light
}

/// Set the `data-theme` attribute on the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = root.set_attribute("data-theme", theme.as_attr()) {
            log::debug!("data-theme not applied: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip, apply and persist. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_string(THEME_STORAGE_KEY, next.as_attr());
    next
}
