//! Placeholder sounds and sprites
//!
//! Nothing is fetched. Each loader resolves after a fixed delay so the
//! asynchronous startup path matches what a real asset pipeline would do.

use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

const SOUND_DELAY_MS: i32 = 500;
const SPRITE_DELAY_MS: i32 = 700;

/// Named sound effect; playing it only logs
#[derive(Debug, Clone)]
pub struct Sound {
    name: &'static str,
}

impl Sound {
    fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn play(&self) {
        console_log!("Playing sound: {}", self.name);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct Sounds {
    pub hit: Sound,
    pub score: Sound,
    pub crowd: Sound,
    pub bounce: Sound,
}

#[derive(Debug, Clone)]
pub struct Sprites {
    pub player: Sprite,
    pub ball: Sprite,
    pub court: Sprite,
    pub background: Sprite,
}

impl Sprites {
    pub fn named(&self) -> [(&'static str, Sprite); 4] {
        [
            ("player", self.player),
            ("ball", self.ball),
            ("court", self.court),
            ("background", self.background),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Assets {
    pub sounds: Sounds,
    pub sprites: Sprites,
}

/// Promise resolving `ms` milliseconds from now; the timer starts immediately
fn timer(ms: i32) -> Result<Promise, JsValue> {
    let window = crate::window()?;
    let mut scheduled = Ok(());
    let promise = Promise::new(&mut |resolve, _reject| {
        scheduled = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .map(|_| ());
    });
    scheduled?;
    Ok(promise)
}

fn sounds() -> Sounds {
    Sounds {
        hit: Sound::new("hit"),
        score: Sound::new("score"),
        crowd: Sound::new("crowd"),
        bounce: Sound::new("bounce"),
    }
}

fn sprites() -> Sprites {
    Sprites {
        player: Sprite { width: 64, height: 128 },
        ball: Sprite { width: 32, height: 32 },
        court: Sprite { width: 800, height: 600 },
        background: Sprite { width: 1024, height: 768 },
    }
}

/// Load sounds and sprites side by side
pub async fn load_assets() -> Result<Assets, JsValue> {
    let pending = Array::of2(&timer(SOUND_DELAY_MS)?, &timer(SPRITE_DELAY_MS)?);
    JsFuture::from(Promise::all(&pending)).await?;
    console_log!("Sounds and sprites loaded");

    Ok(Assets {
        sounds: sounds(),
        sprites: sprites(),
    })
}
