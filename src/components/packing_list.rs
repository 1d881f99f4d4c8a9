//! Packing List Component
//!
//! Renders the collection as rows keyed by item id.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::PackingController;

#[component]
pub fn PackingList(controller: PackingController) -> impl IntoView {
    let items = controller.items();

    view! {
        <section class="packing-list">
            <h2>"Your Packing List"</h2>
            <Show
                when=move || items.with(|c| !c.is_empty())
                fallback=|| view! {
                    <p class="empty-list">
                        "No items added yet. Start packing by adding items above!"
                    </p>
                }
            >
                <ul>
                    <For
                        each=move || items.with(|c| c.items().to_vec())
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id;
                            // Rows stay keyed by id; live fields are read back from the collection
                            let current = Signal::derive(move || {
                                items.with(|c| c.get(id).cloned()).unwrap_or_else(|| item.clone())
                            });
                            view! { <ItemRow item=current controller=controller /> }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
