//! DOM listeners feeding the input snapshot

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Court, TransitionResult};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

use crate::app::App;

/// Map a pointer's client coordinates onto court units
fn court_point(canvas: &HtmlCanvasElement, court: &Court, event: &PointerEvent) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let x = (event.client_x() as f64 - rect.left()) * court.width as f64 / rect.width();
    let y = (event.client_y() as f64 - rect.top()) * court.height as f64 / rect.height();
    Some(Vec2::new(x as f32, y as f32))
}

fn log_transition(result: Option<TransitionResult>) {
    if let Some(result) = result.filter(|r| r.success()) {
        console_log!(
            "{:?}: {:?} -> {:?}",
            result.action(),
            result.from_phase(),
            result.to_phase()
        );
    }
}

pub fn register_keyboard(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let window = crate::window()?;

    let app_down = Rc::clone(app);
    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let mut app = app_down.borrow_mut();
        let key = event.key();
        if key.starts_with("Arrow") {
            event.prevent_default();
        }
        if let Some(command) = app.input.key_down(&key) {
            if event.repeat() {
                return;
            }
            let result = app.game.handle_command(command);
            log_transition(result);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    let app_up = Rc::clone(app);
    let on_keyup = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        app_up.borrow_mut().input.key_up(&event.key());
    }) as Box<dyn FnMut(KeyboardEvent)>);
    window.add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())?;
    on_keyup.forget();

    let app_blur = Rc::clone(app);
    let on_blur = Closure::wrap(Box::new(move || {
        app_blur.borrow_mut().input.release_all();
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
    on_blur.forget();

    Ok(())
}

pub fn register_pointer(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let app_down = Rc::clone(app);
    let canvas_down = canvas.clone();
    let on_pointerdown = Closure::wrap(Box::new(move |event: PointerEvent| {
        event.prevent_default();
        let mut app = app_down.borrow_mut();
        let App { game, input, .. } = &mut *app;
        let Some(point) = court_point(&canvas_down, &game.court, &event) else {
            return;
        };

        if game.is_running() {
            if !game.is_paused() {
                input.touch(point, &game.court);
            }
        } else {
            let result = game.click(point);
            log_transition(result);
        }
    }) as Box<dyn FnMut(PointerEvent)>);
    canvas.add_event_listener_with_callback("pointerdown", on_pointerdown.as_ref().unchecked_ref())?;
    on_pointerdown.forget();

    let app_move = Rc::clone(app);
    let canvas_move = canvas.clone();
    let on_pointermove = Closure::wrap(Box::new(move |event: PointerEvent| {
        // Mice only steer while a button is held
        if event.pointer_type() != "touch" && event.buttons() == 0 {
            return;
        }
        event.prevent_default();
        let mut app = app_move.borrow_mut();
        let App { game, input, .. } = &mut *app;
        if !game.is_running() || game.is_paused() {
            return;
        }
        if let Some(point) = court_point(&canvas_move, &game.court, &event) {
            input.touch(point, &game.court);
        }
    }) as Box<dyn FnMut(PointerEvent)>);
    canvas.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref())?;
    on_pointermove.forget();

    Ok(())
}
