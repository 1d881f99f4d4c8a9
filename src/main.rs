//! Packing List Frontend Entry Point

mod app;
mod collection;
mod components;
mod config;
mod context;
mod form;
mod ids;
mod logger;
mod models;
mod stats;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    logger::init(config.log_level);
    log::info!("[APP] Starting \"{}\" (log level {})", config.title, config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
