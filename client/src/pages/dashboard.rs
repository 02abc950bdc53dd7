//! Authenticated landing page with quick links.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::Shell;
use crate::state::auth::AuthState;
use crate::state::ui::NAV_ITEMS;
use crate::util::auth::install_unauth_redirect;

/// Friendly name for a login id: the local part of an email, else the id.
fn greeting_name(id: &str) -> &str {
    match id.split_once('@') {
        Some((local, _)) if !local.is_empty() => local,
        _ => id,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let welcome = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome back!".to_owned(), |u| format!("Welcome back, {}!", greeting_name(&u.id)))
    };

    let links = NAV_ITEMS
        .iter()
        .filter(|item| item.href != "/dashboard")
        .map(|item| {
            view! {
                <a class="quick-action" href=item.href>
                    {format!("View {}", item.label)}
                </a>
            }
        })
        .collect_view();

    view! {
        <Shell>
            <section class="dashboard-page">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__welcome">{welcome}</p>
                <div class="card">
                    <h2 class="card__title">"Quick Actions"</h2>
                    <div class="quick-actions">{links}</div>
                </div>
            </section>
        </Shell>
    }
}
