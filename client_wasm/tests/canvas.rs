#![cfg(target_arch = "wasm32")]

use client_wasm::canvas::Canvas2d;
use game_core::render::{render, COURT_GREEN};
use game_core::{Action, Match};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn court_canvas() -> HtmlCanvasElement {
    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_width(800);
    canvas.set_height(600);
    canvas
}

fn pixel(canvas: &Canvas2d, x: f64, y: f64) -> [u8; 3] {
    let data = canvas
        .context()
        .get_image_data(x, y, 1.0, 1.0)
        .expect("image data")
        .data();
    [data[0], data[1], data[2]]
}

#[wasm_bindgen_test]
fn menu_paints_start_button() {
    let element = court_canvas();
    let mut canvas = Canvas2d::new(&element).expect("2d context");

    render(&mut canvas, &Match::default());

    assert_eq!(pixel(&canvas, 10.0, 10.0), [0, 0, 0]);
    assert_eq!(pixel(&canvas, 310.0, 285.0), [0, 128, 0]);
}

#[wasm_bindgen_test]
fn match_frame_paints_court_and_ball() {
    let element = court_canvas();
    let mut canvas = Canvas2d::new(&element).expect("2d context");
    let mut game = Match::default();
    assert!(game.apply(Action::Start).success());

    render(&mut canvas, &game);

    assert_eq!(pixel(&canvas, 50.0, 550.0), [0x2F, 0x78, 0x31]);
    assert_eq!(pixel(&canvas, 400.0, 300.0), [255, 255, 0], "Ball at center");
    assert_eq!(pixel(&canvas, 110.0, 300.0), [255, 255, 255], "Left paddle");
}
