//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{CONFIG_META_NAME, ClientConfig};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, students::StudentsPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::HOME_ROUTE;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds the [`ClientConfig`] from context so the hydrate entry point can
/// provide the same value before mounting.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CONFIG_META_NAME content=config.to_meta_content()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth, UI and config contexts, probes the session once in the
/// browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_default();
    provide_context(config.clone());

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        ui.update(|u| u.theme = theme);

        let probe_config = config.clone();
        leptos::task::spawn_local(async move {
            let state = match crate::net::api::fetch_logged_user(&probe_config).await {
                Some(user) => {
                    log::debug!("session active for {}", user.id);
                    AuthState::signed_in(user)
                }
                None => AuthState::signed_out(),
            };
            auth.set(state);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/schooldesk.css"/>
        <Title text=config.tenant_name/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("students") view=StudentsPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_ROUTE/> }/>
            </Routes>
        </Router>
    }
}
