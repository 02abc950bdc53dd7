//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys glue in one place so the theme toggle and the login form's
//! remembered email share the same best-effort read/write path. Off-browser
//! every read is `None` and every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding the email a user asked the login form to remember.
pub const REMEMBERED_EMAIL_KEY: &str = "school_remembered_email";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::debug!("localStorage write refused for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                log::debug!("localStorage remove refused for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Email to prefill on the login form, if one was remembered.
pub fn remembered_email() -> Option<String> {
    load_string(REMEMBERED_EMAIL_KEY).filter(|email| !email.trim().is_empty())
}

/// Persist or forget the login email depending on the "remember me" box.
pub fn set_remembered_email(email: &str, remember: bool) {
    if remember {
        save_string(REMEMBERED_EMAIL_KEY, email);
    } else {
        remove(REMEMBERED_EMAIL_KEY);
    }
}
