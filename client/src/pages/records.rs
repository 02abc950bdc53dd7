//! Generic paginated, searchable list page for one document type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `RecordListState` signal. Every parameter change yields a
//! `FetchTicket`; the ticket's query runs in a local task and its result goes
//! back through `complete`, which drops anything but the newest generation.
//! An alive flag cleared on cleanup keeps late results away from a disposed
//! view.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::components::page_size_selector::PageSizeSelector;
use crate::components::record_detail::RecordDetailDialog;
use crate::components::record_table::RecordTable;
use crate::components::search_input::SearchInput;
use crate::components::shell::Shell;
use crate::config::ClientConfig;
use crate::entities::EntityView;
use crate::state::auth::AuthState;
use crate::state::page_size::PageSizeOptions;
use crate::state::records::{FetchTicket, QueryParameters, RecordListState, ViewStatus};
use crate::util::auth::install_unauth_redirect;

/// "21–40" style range for the rows on screen, or "No results".
fn page_range_label(params: &QueryParameters, row_count: usize) -> String {
    if row_count == 0 {
        return "No results".to_owned();
    }
    let start = u64::from(params.limit_start()) + 1;
    let end = u64::from(params.limit_start()) + row_count as u64;
    format!("{start}–{end}")
}

/// Run a ticket's query and hand the result back to the list state.
fn spawn_fetch(
    list: RwSignal<RecordListState>,
    config: StoredValue<ClientConfig>,
    ticket: FetchTicket,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let doctype = list.with_untracked(|s| s.spec().doctype);
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_doc_list(&config, doctype, &ticket.query).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            let outcome = list.try_update(|s| s.complete(ticket.generation, result));
            if outcome == Some(crate::state::records::FetchOutcome::Stale) {
                log::debug!("dropped stale {doctype} page, generation {}", ticket.generation);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, config, ticket, alive);
    }
}

#[component]
pub fn RecordListPage(entity: EntityView) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let config = use_context::<ClientConfig>().unwrap_or_default();
    let options = PageSizeOptions::new(config.page_size_options.clone());
    let (debounce_ms, min_chars) = (config.search_debounce_ms, config.search_min_chars);
    let config = StoredValue::new(config);

    let (initial, ticket) = RecordListState::new(entity.list, options.clone(), QueryParameters::new(options.first()));
    let list = RwSignal::new(initial);
    let alive = Arc::new(AtomicBool::new(true));

    let run = {
        let alive = alive.clone();
        Callback::new(move |ticket: FetchTicket| spawn_fetch(list, config, ticket, alive.clone()))
    };
    run.run(ticket);

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        list.try_update(RecordListState::close);
    });

    let dispatch = move |change: &dyn Fn(&mut RecordListState) -> Option<FetchTicket>| {
        if let Some(ticket) = list.try_update(|s| change(s)).flatten() {
            run.run(ticket);
        }
    };

    let on_search = Callback::new(move |term: String| dispatch(&|s: &mut RecordListState| s.set_search_term(&term)));
    let on_page_size = Callback::new(move |size: u32| match list.try_update(|s| s.set_page_size(size)) {
        Some(Ok(Some(ticket))) => run.run(ticket),
        Some(Err(err)) => {
            #[cfg(feature = "hydrate")]
            log::warn!("ignored page size change: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
        }
        _ => {}
    });
    let on_select = Callback::new(move |id: String| {
        list.update(|s| {
            s.select(&id);
        });
    });
    let on_dismiss = Callback::new(move |()| list.update(RecordListState::dismiss));

    let search_term = Signal::derive(move || list.with(|s| s.params().search_term.clone()));
    let page_size = Signal::derive(move || list.with(|s| s.params().page_size));
    // Rows change identity only when a fetch is applied.
    let rows = Memo::new_with_compare(move |_| list.with(RecordListState::rows), |prev, next| {
        !matches!((prev, next), (Some(a), Some(b)) if Arc::ptr_eq(a, b))
    });
    let selected = Memo::new(move |_| list.with(|s| s.selected_record().cloned()));
    let loading = Signal::derive(move || list.with(RecordListState::is_loading));
    let status = Memo::new(move |_| list.with(RecordListState::status));

    let error_banner = move || match status.get() {
        ViewStatus::Error(message) => Some(view! {
            <div class="records-page__error" role="alert">
                <span>{message}</span>
                <button class="btn" on:click=move |_| dispatch(&RecordListState::refresh)>
                    "Retry"
                </button>
            </div>
        }),
        _ => None,
    };

    let range_label = move || list.with(|s| page_range_label(s.params(), s.rows().len()));
    let page_label = move || format!("Page {}", list.with(|s| s.params().page));

    let detail = move || {
        selected
            .get()
            .map(|record| view! { <RecordDetailDialog record=record entity=entity on_close=on_dismiss/> })
    };

    view! {
        <Shell>
            <section class="records-page">
                <header class="records-page__header">
                    <h1>{entity.title}</h1>
                    <SearchInput
                        value=search_term
                        on_change=on_search
                        placeholder=entity.search_placeholder
                        debounce_ms=debounce_ms
                        min_chars=min_chars
                    />
                    <button
                        class="btn"
                        title="Reload this page"
                        disabled=move || loading.get()
                        on:click=move |_| dispatch(&RecordListState::refresh)
                    >
                        "Refresh"
                    </button>
                </header>
                {error_banner}
                <div class="records-page__table" class:records-page__table--loading=move || loading.get()>
                    <RecordTable entity=entity rows=rows loading=loading on_select=on_select/>
                    <Show when=move || loading.get()>
                        <Loader/>
                    </Show>
                </div>
                <footer class="records-page__footer">
                    <div class="pager">
                        <button
                            class="btn pager__prev"
                            disabled=move || loading.get() || list.with(|s| s.params().page <= 1)
                            on:click=move |_| dispatch(&RecordListState::prev_page)
                        >
                            "Previous"
                        </button>
                        <span class="pager__label">{page_label}</span>
                        <span class="pager__range">{range_label}</span>
                        <button
                            class="btn pager__next"
                            disabled=move || !list.with(RecordListState::has_next_page)
                            on:click=move |_| dispatch(&RecordListState::next_page)
                        >
                            "Next"
                        </button>
                    </div>
                    <PageSizeSelector value=page_size options=options on_change=on_page_size/>
                </footer>
                {detail}
            </section>
        </Shell>
    }
}
