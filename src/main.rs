//! TechStore Frontend Entry Point

mod models;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::ShopConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::read_embedded();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => ShopConfig::default(),
    };

    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    match loaded {
        Ok(Some(_)) => log::info!("[Config] Loaded embedded config for {}", config.store_name),
        Ok(None) => log::info!("[Config] No embedded config, using defaults"),
        Err(e) => log::warn!("[Config] {}, using defaults", e),
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
