//! Round avatar: record image when present, else a colored initial.

use leptos::prelude::*;

use crate::state::detail::Avatar;

#[component]
pub fn AvatarBadge(avatar: Avatar, #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large { "avatar avatar--large" } else { "avatar" };
    match avatar.image_url {
        Some(src) => view! { <img class=class src=src alt=""/> }.into_any(),
        None => view! {
            <span class=class style=format!("background-color: {}", avatar.color) aria-hidden="true">
                {avatar.initial.to_uppercase()}
            </span>
        }
        .into_any(),
    }
}
