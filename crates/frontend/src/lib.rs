pub mod app;
pub mod app_shell;
pub mod domain;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: logging, panic hook, then mount the admin app
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Starting admin frontend v{}", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(app::App);
}
