use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

mod test_support;

/// Browser entry point: logging first, then config, then the app.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting HRMS Lite frontend");

    leptos::spawn_local(async move {
        let config = config::load().await;
        log::info!("API base URL: {}", config.api_base_url);
        router::mount_app(config);
    });
}
