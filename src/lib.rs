#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod core;
mod dom;
mod frame;
mod host;
mod render;
mod widget;

// Runs when the bundle is instantiated inside the dashboard iframe; the host
// expects the visualization to be registered by the time the script returns.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("looker-gauge starting");

    if let Err(e) = host::register() {
        log::error!("register error: {:?}", e);
    }
    Ok(())
}
