//! Browser shell for the resumatch UI.
//!
//! All state lives in Rust: DOM events become [`resumatch_core::Msg`]
//! values, the pure core decides what changed, and the shell applies the
//! resulting render commands and effects against the host page.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { boot } from './pkg/resumatch_web.js';
//!
//! await init();
//! boot(); // or boot("http://127.0.0.1:5000/analyze")
//! ```

mod app;
mod dom;
mod effects;
mod events;
mod ui;

use wasm_bindgen::prelude::*;

/// Module initialization, called automatically by wasm-bindgen.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Wires the controller to the current document.
///
/// `endpoint` overrides the default analysis URL when given.
#[wasm_bindgen]
pub fn boot(endpoint: Option<String>) -> Result<(), JsValue> {
    app::boot(endpoint)
}
