//! Canvas setup and the frame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::render::render;
use game_core::{Config, Events, InputState, Match, Phase, Side};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::assets::Assets;
use crate::canvas::Canvas2d;
use crate::input;

/// Everything the listeners and the frame loop share
pub struct App {
    pub game: Match,
    pub input: InputState,
    canvas: Canvas2d,
    assets: Assets,
    last_ts: Option<f64>,
    last_phase: Phase,
}

impl App {
    fn new(canvas: Canvas2d, assets: Assets) -> Self {
        let seed = js_sys::Date::now() as u64;
        let game = Match::new(Config::default(), seed);
        let last_phase = game.phase();
        for (name, sprite) in assets.sprites.named() {
            console_log!("Sprite {}: {}x{}", name, sprite.width, sprite.height);
        }
        Self {
            game,
            input: InputState::new(),
            canvas,
            assets,
            last_ts: None,
            last_phase,
        }
    }

    /// One animation frame: simulate what is due, then paint
    fn frame(&mut self, ts: f64) {
        let elapsed = self.last_ts.map_or(0.0, |last| (ts - last) / 1000.0);
        self.last_ts = Some(ts);

        let ticks = self.game.advance(elapsed as f32, &self.input);
        if ticks > 0 {
            self.input.end_frame();
        }
        self.play_sounds(self.game.events);
        self.report_phase();

        render(&mut self.canvas, &self.game);
    }

    fn play_sounds(&self, events: Events) {
        let sounds = &self.assets.sounds;
        if events.ball_hit_wall {
            sounds.bounce.play();
        }
        if events.ball_hit_paddle {
            sounds.hit.play();
        }
        for side in Side::BOTH {
            if events.has_scored(side) {
                sounds.score.play();
                console_log!(
                    "{} scores: {} - {}",
                    side.name(),
                    self.game.score.left,
                    self.game.score.right
                );
            }
        }
    }

    fn report_phase(&mut self) {
        let phase = self.game.phase();
        if phase == self.last_phase {
            return;
        }
        if phase == Phase::Ended {
            self.assets.sounds.crowd.play();
            if let Some(winner) = self.game.winner() {
                console_log!("{} player wins", winner.name());
            }
        }
        self.last_phase = phase;
    }
}

fn create_canvas(width: u32, height: u32) -> Result<HtmlCanvasElement, JsValue> {
    let document = crate::window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(width);
    canvas.set_height(height);
    let _ = canvas.set_attribute("style", "touch-action: none");
    body.append_child(&canvas)?;
    Ok(canvas)
}

/// Mount the canvas, hook up listeners and start the frame loop
pub fn run(assets: Assets) -> Result<(), JsValue> {
    let config = Config::default();
    let canvas = create_canvas(config.court_width as u32, config.court_height as u32)?;
    let app = Rc::new(RefCell::new(App::new(Canvas2d::new(&canvas)?, assets)));

    input::register_keyboard(&app)?;
    input::register_pointer(&app, &canvas)?;

    // Paint the menu before the first frame arrives
    {
        let mut state = app.borrow_mut();
        let App { canvas, game, .. } = &mut *state;
        render(canvas, game);
    }

    let raf_holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let raf_cb = Rc::clone(&raf_holder);
    *raf_holder.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        app.borrow_mut().frame(ts);

        if let Some(cb) = raf_cb.borrow().as_ref() {
            if let Ok(window) = crate::window() {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = raf_holder.borrow().as_ref() {
        crate::window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    console_log!("Court tennis ready");
    Ok(())
}
