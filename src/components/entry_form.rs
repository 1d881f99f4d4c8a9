//! Entry Form Component
//!
//! Form for adding a new item with a quantity.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::EntryDraft;
use crate::ids::{self, IdGenerator};
use crate::store::PackingController;

/// Form for creating new items
#[component]
pub fn EntryForm(controller: PackingController) -> impl IntoView {
    let default_color = use_app_context().config.default_color;

    let draft = RwSignal::new(EntryDraft::default());
    let id_source = StoredValue::new(IdGenerator::default());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut next = draft.get_untracked();
        let next_id = || {
            id_source
                .try_update_value(IdGenerator::issue)
                .unwrap_or_else(ids::now_millis)
        };

        match next.submit(next_id, &default_color) {
            Ok(item) => {
                log::debug!("[FORM] Submitting \"{}\" x{}", item.description, item.quantity);
                controller.add_item(item);
                draft.set(next);
            }
            Err(err) => {
                log::info!("[FORM] Rejected: {}", err);
                show_notice(&err.to_string());
            }
        }
    };

    view! {
        <form class="form" on:submit=add_item>
            <h3>"What do you need to pack?"</h3>
            <div class="form-group">
                <input
                    type="number"
                    name="quantity"
                    min="1"
                    class="input-quantity"
                    prop:value=move || draft.with(|d| d.quantity.to_string())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        draft.update(|d| d.set_quantity_input(&raw));
                    }
                />
                <input
                    type="text"
                    name="description"
                    placeholder="Enter item..."
                    class="input-description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        draft.update(|d| d.description = text);
                    }
                />
                <button type="submit" class="btn-add">"Add"</button>
            </div>
        </form>
    }
}

/// Blocking browser alert
fn show_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::error!("[FORM] Could not show notice: {}", message);
        }
    }
}
