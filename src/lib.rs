#![cfg(target_arch = "wasm32")]
//! Browser enhancements for the cyber blog theme: ambient page decorations
//! and the welcome-gate splash overlay.
//!
//! Everything here is decorative. Missing DOM targets and absent browser
//! capabilities degrade to no-ops; the page stays usable if every
//! enhancement fails.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod constants;
pub mod core;
mod decor;
mod dom;
mod frame;
mod gate;
mod progress;
mod rain;
mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cyber-web starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };

    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(boot) as Box<dyn FnMut()>);
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    decor::init(&document);
    gate::boot(&document);
    Ok(())
}
