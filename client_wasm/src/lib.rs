//! Browser client for court tennis
//!
//! Owns the canvas, the DOM listeners and the frame loop. All game rules
//! live in `game_core`; this crate only feeds it input and paints the result.

#![cfg(target_arch = "wasm32")]

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*)))
    };
}

macro_rules! console_error {
    ($($t:tt)*) => {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*)))
    };
}

mod app;
pub mod assets;
pub mod canvas;
mod input;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log!("Court tennis client starting");

    spawn_local(async {
        if let Err(err) = start_impl().await {
            console_error!("fatal: {:?}", err);
        }
    });
}

async fn start_impl() -> Result<(), JsValue> {
    let assets = assets::load_assets().await?;
    app::run(assets)
}

pub(crate) fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}
