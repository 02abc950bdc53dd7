//! Previous / option buttons / next control for the page size.

#[cfg(test)]
#[path = "page_size_selector_test.rs"]
mod page_size_selector_test;

use leptos::prelude::*;

use crate::state::page_size::PageSizeOptions;

fn option_class(size: u32, current: u32) -> &'static str {
    if size == current { "page-size__option page-size__option--active" } else { "page-size__option" }
}

/// Page size selector. Calls `on_change` synchronously with the chosen size.
#[component]
pub fn PageSizeSelector(
    #[prop(into)] value: Signal<u32>,
    options: PageSizeOptions,
    on_change: Callback<u32>,
) -> impl IntoView {
    let options = StoredValue::new(options);

    let step = move |pick: fn(&PageSizeOptions, u32) -> Option<u32>| {
        if let Some(size) = options.with_value(|o| pick(o, value.get_untracked())) {
            on_change.run(size);
        }
    };

    let buttons = options.with_value(|o| {
        o.as_slice()
            .iter()
            .map(|&size| {
                view! {
                    <button
                        class=move || option_class(size, value.get())
                        aria-pressed=move || (size == value.get()).to_string()
                        on:click=move |_| on_change.run(size)
                    >
                        {size}
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <div class="page-size" role="group" aria-label="Rows per page">
            <button
                class="page-size__step"
                title="Smaller pages"
                disabled=move || options.with_value(|o| o.prev_disabled(value.get()))
                on:click=move |_| step(PageSizeOptions::prev)
            >
                "‹"
            </button>
            {buttons}
            <button
                class="page-size__step"
                title="Larger pages"
                disabled=move || options.with_value(|o| o.next_disabled(value.get()))
                on:click=move |_| step(PageSizeOptions::next)
            >
                "›"
            </button>
        </div>
    }
}
