//! Stats Footer Component

use leptos::prelude::*;

use crate::collection::ItemCollection;

/// Packed/total summary at the bottom of the page
#[component]
pub fn StatsFooter(items: Signal<ItemCollection>) -> impl IntoView {
    let message = move || items.with(|c| c.stats().message());

    view! {
        <footer class="stats">
            <p>{message}</p>
        </footer>
    }
}
