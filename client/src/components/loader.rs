//! Loading indicator.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into, default = "Loading...".to_owned())] label: String) -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite">
            <span class="loader__spinner" aria-hidden="true"></span>
            <span class="loader__label">{label}</span>
        </div>
    }
}
