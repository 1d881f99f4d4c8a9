//! Item Row Component
//!
//! A single entry in the packing list.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::PackingController;

/// One list row. Description, quantity and timestamp never change after
/// creation; packed state and color follow `item`.
#[component]
pub fn ItemRow(item: Signal<Item>, controller: PackingController) -> impl IntoView {
    let created = item.get_untracked();
    let id = created.id;

    let packed = move || item.with(|i| i.packed);
    let color = move || item.with(|i| i.color.clone());

    view! {
        <li
            class=move || if packed() { "item packed" } else { "item" }
            style=move || format!("border-left-color: {};", color())
        >
            <div>
                <span class="item-description">{created.description.clone()}</span>
                " "
                <span class="item-quantity">{created.quantity_label()}</span>
                <br />
                <small class="item-date">{created.created_label()}</small>
            </div>
            <div class="item-actions">
                <input
                    type="color"
                    class="color-picker"
                    prop:value=color
                    on:input=move |ev| controller.change_color(id, &event_target_value(&ev))
                />
                <button class="btn-toggle" on:click=move |_| controller.toggle_packed(id)>
                    {move || if packed() { "Unpack" } else { "Pack" }}
                </button>
                <button class="btn-delete" on:click=move |_| controller.delete_item(id)>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
