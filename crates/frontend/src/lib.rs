pub mod app;
pub mod shared;
pub mod usecases;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::config::load_config();

    // initializes logging using the `log` crate
    let level = config
        .as_ref()
        .map(|c| c.log_level())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|e| {
        log::warn!("invalid embedded configuration, using defaults: {e}");
        shared::config::AppConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
