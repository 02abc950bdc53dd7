//! Authenticated page frame: sidebar navigation plus a top bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the tenant name, the signed-in user, the theme toggle and logout on
//! every guarded page. Page content renders in the main column.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::{NAV_ITEMS, UiState, nav_item_active};

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let tenant_name = config.tenant_name.clone();
    let config = StoredValue::new(config);
    let pathname = use_location().pathname;

    let user_label = move || auth.get().user.map_or_else(|| "—".to_owned(), |u| u.id);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&config).await;
                auth.set(AuthState::signed_out());
                if let Some(w) = web_sys::window() {
                    if let Err(e) = w.location().set_href(crate::util::auth::LOGIN_ROUTE) {
                        log::debug!("login redirect failed: {e:?}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = config;
    };

    let nav = NAV_ITEMS
        .iter()
        .map(|item| {
            let active = move || nav_item_active(item, &pathname.get());
            view! {
                <a
                    href=item.href
                    class="sidebar__link"
                    class:sidebar__link--active=active
                    on:click=move |_| ui.update(|u| u.sidebar_open = false)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="shell" class:shell--sidebar-open=move || ui.get().sidebar_open>
            <aside class="sidebar">
                <div class="sidebar__brand">{tenant_name}</div>
                <nav class="sidebar__nav">{nav}</nav>
            </aside>
            <div class="shell__main">
                <header class="topbar">
                    <button
                        class="btn topbar__menu"
                        title="Toggle navigation"
                        on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
                    >
                        "☰"
                    </button>
                    <span class="topbar__spacer"></span>
                    <button
                        class="btn topbar__theme"
                        title="Toggle dark mode"
                        on:click=move |_| {
                            let next = crate::util::theme::toggle(ui.get_untracked().theme);
                            ui.update(|u| u.theme = next);
                        }
                    >
                        {move || ui.get().theme.toggle_icon()}
                    </button>
                    <span class="topbar__user">{user_label}</span>
                    <button class="btn topbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
