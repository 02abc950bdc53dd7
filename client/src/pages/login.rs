//! Login page with email + password and an optional remembered email.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::auth::{HOME_ROUTE, should_redirect_authed};

const MISSING_FIELDS: &str = "Please fill in all fields";

/// Trim the email and require both fields. Passwords are not trimmed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let tenant_name = config.tenant_name.clone();
    let config = StoredValue::new(config);
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill after hydration so SSR and the first client render agree.
    Effect::new(move || {
        if let Some(saved) = crate::util::storage::remembered_email() {
            email.set(saved);
            remember.set(true);
        }
    });

    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let remember_value = remember.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &email_value, &password_value).await {
                    Ok(()) => {
                        crate::util::storage::set_remembered_email(&email_value, remember_value);
                        let user = crate::net::api::fetch_logged_user(&config)
                            .await
                            .unwrap_or(crate::net::types::SessionUser { id: email_value });
                        info.set(String::new());
                        busy.set(false);
                        // The authed-redirect effect navigates home.
                        auth.set(AuthState::signed_in(user));
                    }
                    Err(e) => {
                        log::info!("login rejected: {e}");
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{tenant_name}</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="you@school.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
