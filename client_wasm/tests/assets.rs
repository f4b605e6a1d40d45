#![cfg(target_arch = "wasm32")]

use client_wasm::assets::{load_assets, Sprite};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn assets_load_side_by_side() {
    let started = js_sys::Date::now();
    let assets = load_assets().await.expect("assets");
    let elapsed = js_sys::Date::now() - started;

    // Both timers run together, so the longer one bounds startup
    assert!(elapsed >= 650.0, "Resolved early after {} ms", elapsed);
    assert!(elapsed < 1100.0, "Loaded one after the other in {} ms", elapsed);

    assert_eq!(assets.sprites.player, Sprite { width: 64, height: 128 });
    assert_eq!(assets.sprites.background, Sprite { width: 1024, height: 768 });
    assert_eq!(assets.sprites.named().len(), 4);
}
