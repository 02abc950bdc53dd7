//! Debounced search box.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keystrokes update a local draft immediately; the committed value reaches
//! `on_change` only after the debounce delay and the minimum-length gate.
//! Decisions live in [`SearchDraft`]; this component only runs timers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::search::{DebounceToken, InputEffect, SearchDraft};

pub const DEFAULT_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_DEBOUNCE_MS: u32 = 1200;
pub const DEFAULT_MIN_CHARS: usize = 3;

/// Search input committing through `on_change` after `debounce_ms` of quiet.
#[component]
pub fn SearchInput(
    /// Committed term owned by the parent.
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into, default = DEFAULT_PLACEHOLDER.to_owned())] placeholder: String,
    #[prop(default = DEFAULT_DEBOUNCE_MS)] debounce_ms: u32,
    #[prop(default = DEFAULT_MIN_CHARS)] min_chars: usize,
) -> impl IntoView {
    let draft = RwSignal::new(SearchDraft::new(&value.get_untracked(), debounce_ms, min_chars));
    let alive = Arc::new(AtomicBool::new(true));

    // External value changes win only while the user is not typing.
    Effect::new(move || {
        let external = value.get();
        draft.update(|d| {
            d.sync_external(&external);
        });
    });

    let alive_input = alive.clone();
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        match draft.try_update(|d| d.input(&text)) {
            Some(InputEffect::Commit(term)) => on_change.run(term),
            Some(InputEffect::Schedule { token, delay_ms }) => {
                schedule_settle(draft, on_change, token, delay_ms, alive_input.clone());
            }
            None => {}
        }
    };

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        draft.try_update(SearchDraft::cancel);
    });

    view! {
        <div class="search-input" class:search-input--pending=move || draft.with(SearchDraft::is_pending)>
            <input
                class="search-input__field"
                type="search"
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.draft().to_owned())
                on:input=on_input
                on:focus=move |_| draft.update(|d| d.set_focused(true))
                on:blur=move |_| draft.update(|d| d.set_focused(false))
            />
        </div>
    }
}

fn schedule_settle(
    draft: RwSignal<SearchDraft>,
    on_change: Callback<String>,
    token: DebounceToken,
    delay_ms: u32,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        if let Some(term) = draft.try_update(|d| d.settle(token)).flatten() {
            on_change.run(term);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, on_change, token, delay_ms, alive);
    }
}
