//! Browser bindings
//!
//! The page owns the canvas, the sprite sheet and the animation frame loop;
//! it drives a [`WebGame`] once per frame and draws from the JSON snapshots.

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::consts::*;
use crate::highscores::HighScores;
use crate::platform::{AudioSink, Cue, InputState, PlatformSdk};
use crate::scene::Scene;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Forwards cues to a JS `(name, volume) => void` callback
pub struct JsAudio {
    callback: Option<Function>,
}

impl AudioSink for JsAudio {
    fn play(&mut self, cue: Cue, volume: f32) {
        let Some(callback) = &self.callback else {
            return;
        };
        let name = JsValue::from_str(cue.as_str());
        if let Err(e) = callback.call2(&JsValue::NULL, &name, &JsValue::from_f64(volume as f64)) {
            log::warn!("Audio callback failed for {}: {:?}", cue.as_str(), e);
        }
    }
}

/// Forwards the final score to a JS `(score) => void` callback
pub struct JsSdk {
    on_game_over: Option<Function>,
}

impl PlatformSdk for JsSdk {
    fn report_game_over(&mut self, score: u64) {
        let Some(callback) = &self.on_game_over else {
            log::info!("Run over with {} points (no platform hook)", score);
            return;
        };
        if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_f64(score as f64)) {
            log::warn!("Game over hook failed: {:?}", e);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Fish Frenzy module loaded");
}

/// One game instance exposed to the page
#[wasm_bindgen]
pub struct WebGame {
    scene: Scene<JsAudio, JsSdk>,
    input: InputState,
    /// CSS width of the canvas, used to split touch zones
    screen_width: f32,
}

#[wasm_bindgen]
impl WebGame {
    /// `tuning_json` may be empty for the default balance
    #[wasm_bindgen(constructor)]
    pub fn new(
        tuning_json: &str,
        on_cue: Option<Function>,
        on_game_over: Option<Function>,
    ) -> Result<WebGame, JsValue> {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json)
                .map_err(|e| JsValue::from_str(&format!("invalid tuning: {}", e)))?
        };
        let seed = js_sys::Date::now() as u64;
        let scene = Scene::new(
            seed,
            tuning,
            JsAudio { callback: on_cue },
            JsSdk { on_game_over },
        )
        .with_settings(Settings::load())
        .with_high_scores(HighScores::load());

        Ok(WebGame {
            scene,
            input: InputState::default(),
            screen_width: WORLD_WIDTH,
        })
    }

    /// Advance by `dt` seconds (the frame delta from requestAnimationFrame)
    pub fn tick(&mut self, dt: f32) {
        let input = self.input.take_tick_input(self.screen_width);
        self.scene.tick(&input, dt);
    }

    pub fn set_screen_width(&mut self, width: f32) {
        if width > 0.0 {
            self.screen_width = width;
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.set_key(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.set_key(key, false);
    }

    /// Replace the active touch list with the given x positions
    pub fn set_touches(&mut self, xs: Vec<f32>) {
        self.input.touches = xs;
    }

    pub fn toggle_pause(&mut self) {
        self.input.pause_requested = true;
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        self.input.auto_play = enabled;
    }

    pub fn play_again(&mut self) {
        self.scene.play_again();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.scene.settings_mut().muted = muted;
        self.scene.settings().save();
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.scene.settings_mut().reduced_motion = reduced;
        self.scene.settings().save();
    }

    pub fn is_finished(&self) -> bool {
        self.scene.is_finished()
    }

    pub fn hud_json(&self) -> String {
        to_json(&self.scene.hud())
    }

    pub fn sprites_json(&self) -> String {
        to_json(&self.scene.sprites())
    }

    pub fn high_scores_json(&self) -> String {
        to_json(self.scene.high_scores())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Snapshot serialization failed: {}", e);
        String::from("null")
    })
}
