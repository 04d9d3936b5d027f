mod app;
pub mod core;
pub mod features;

use wasm_bindgen::prelude::*;

/// Entry point run by the wasm-bindgen glue as soon as the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly; keep the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    crate::core::runtime::init_executor();

    let config = crate::core::config::load_config();
    crate::core::dom::on_dom_ready(move || app::boot(&config));
}
