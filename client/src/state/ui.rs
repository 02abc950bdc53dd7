//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of record state so the shell can change
//! independently of list fetching.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Sidebar visibility on narrow screens; wide layouts always show it.
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { theme: Theme::Light, sidebar_open: false }
    }
}

/// Sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/dashboard" },
    NavItem { label: "Students", href: "/students" },
];

/// Whether `item` should be highlighted for the current location path.
#[must_use]
pub fn nav_item_active(item: &NavItem, pathname: &str) -> bool {
    let path = pathname.trim_end_matches('/');
    path == item.href || path.starts_with(&format!("{}/", item.href))
}
