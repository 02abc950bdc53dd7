//! Modal showing every projected field of one record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the list page for the selected row. Closing calls `on_close`
//! and nothing else, so the page and query parameters survive.

use leptos::prelude::*;

use crate::components::avatar::AvatarBadge;
use crate::entities::EntityView;
use crate::net::types::Record;
use crate::state::detail::{ProjectedSection, project};

#[component]
pub fn RecordDetailDialog(record: Record, entity: EntityView, on_close: Callback<()>) -> impl IntoView {
    let detail = project(&record, &entity.detail);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the dialog so Escape reaches its keydown handler.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            if let Err(e) = el.focus() {
                log::debug!("detail dialog focus failed: {e:?}");
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let subtitles = detail
        .subtitles
        .into_iter()
        .map(|line| view! { <p class="detail__subtitle">{line}</p> })
        .collect_view();

    let sections = detail
        .sections
        .into_iter()
        .map(|section| match section {
            ProjectedSection::Fields { heading, rows } => {
                let rows = rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="detail__row">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <section class="detail__section">
                        <h3>{heading}</h3>
                        <dl class="detail__fields">{rows}</dl>
                    </section>
                }
                .into_any()
            }
            ProjectedSection::List { heading, items } => {
                let items = items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view();
                view! {
                    <section class="detail__section">
                        <h3>{heading}</h3>
                        <ul class="detail__list">{items}</ul>
                    </section>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--detail"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="detail__header">
                    <AvatarBadge avatar=detail.avatar large=true/>
                    <div>
                        <h2 class="detail__title">{detail.title}</h2>
                        <p class="detail__id">{detail.id}</p>
                        {subtitles}
                    </div>
                    <button class="btn dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                {sections}
            </div>
        </div>
    }
}
