//! Packing List Frontend App
//!
//! Root component: owns the state and lays out the page.

use leptos::prelude::*;

use crate::components::{EntryForm, Logo, PackingList, StatsFooter};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::PackingController;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide settings to all children
    provide_context(AppContext::new(config));

    // State
    let controller = PackingController::new();

    view! {
        <div class="app">
            <Logo />
            <EntryForm controller=controller />
            <PackingList controller=controller />
            <StatsFooter items=controller.items() />
        </div>
    }
}
