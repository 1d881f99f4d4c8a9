//! Application State Store
//!
//! Uses Leptos reactive_stores. The store is the single owner of the item
//! collection; components get a `PackingController` handle and can only
//! read through a signal or call one of its four operations.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::ItemCollection;
use crate::models::{Item, ItemId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, newest first
    pub items: ItemCollection,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Handle to the packing list state, passed down to components as a prop
#[derive(Clone, Copy)]
pub struct PackingController {
    store: AppStore,
}

impl PackingController {
    pub fn new() -> Self {
        Self {
            store: Store::new(AppState::default()),
        }
    }

    /// Read-only view of the collection
    pub fn items(&self) -> Signal<ItemCollection> {
        let store = self.store;
        Signal::derive(move || store.items().get())
    }

    pub fn add_item(&self, item: Item) {
        let id = item.id;
        match self.current().with_added(item) {
            Some(next) => {
                log::info!("[STORE] Added item {}", id);
                self.install(next);
            }
            None => log::warn!("[STORE] Ignoring item with duplicate id {}", id),
        }
    }

    pub fn delete_item(&self, id: ItemId) {
        let current = self.current();
        if !current.contains(id) {
            log::debug!("[STORE] Delete: no item {}", id);
        }
        self.install(current.without(id));
    }

    pub fn toggle_packed(&self, id: ItemId) {
        log::debug!("[STORE] Toggle packed {}", id);
        self.install(self.current().with_packed_toggled(id));
    }

    pub fn change_color(&self, id: ItemId, color: &str) {
        log::debug!("[STORE] Color {} -> {}", id, color);
        self.install(self.current().with_color(id, color));
    }

    fn current(&self) -> ItemCollection {
        self.store.items().get_untracked()
    }

    /// Replace the collection wholesale
    fn install(&self, next: ItemCollection) {
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(snapshot) = serde_json::to_string(&next) {
                log::debug!("[STORE] {} items: {}", next.len(), snapshot);
            }
        }
        self.store.items().set(next);
    }
}
