//! Table of the current page of records.
//!
//! Rows are clickable; each click reports the record id through `on_select`.
//! Cell text goes through `display_value` so missing fields show "N/A".

#[cfg(test)]
#[path = "record_table_test.rs"]
mod record_table_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::avatar::AvatarBadge;
use crate::entities::{Column, EntityView};
use crate::net::types::Record;
use crate::state::detail::{Avatar, avatar, display_value, joined_display};

/// Pre-rendered strings for one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RowView {
    id: String,
    avatar: Avatar,
    title: String,
    secondary: String,
    cells: Vec<String>,
}

fn row_view(record: &Record, entity: &EntityView) -> RowView {
    RowView {
        id: record.id().to_owned(),
        avatar: avatar(record, &entity.detail),
        title: joined_display(record, entity.detail.title_fields),
        secondary: display_value(record.get(entity.lead.secondary_field)),
        cells: entity.columns.iter().map(|c: &Column| display_value(record.get(c.field))).collect(),
    }
}

#[component]
pub fn RecordTable(
    entity: EntityView,
    #[prop(into)] rows: Signal<Arc<Vec<Record>>>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let headers = entity.columns.iter().map(|c| view! { <th>{c.header}</th> }).collect_view();

    let body = move || {
        let rows = rows.get();
        if rows.is_empty() {
            let colspan = (entity.columns.len() + 1).to_string();
            let message = if loading.get() { "" } else { entity.empty_message };
            return view! {
                <tr class="record-table__empty">
                    <td colspan=colspan>{message}</td>
                </tr>
            }
            .into_any();
        }
        rows.iter()
            .map(|record| {
                let row = row_view(record, &entity);
                let id = row.id.clone();
                let cells = row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view();
                view! {
                    <tr class="record-table__row" tabindex="0" on:click=move |_| on_select.run(id.clone())>
                        <td class="record-table__lead">
                            <AvatarBadge avatar=row.avatar/>
                            <div class="record-table__names">
                                <span class="record-table__title">{row.title}</span>
                                <span class="record-table__secondary">{row.secondary}</span>
                            </div>
                        </td>
                        {cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <table class="record-table">
            <thead>
                <tr>
                    <th>{entity.lead.header}</th>
                    {headers}
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
