//! Input collection
//!
//! Keyboard keys and multi-touch zones both reduce to the same pair of
//! booleans; the simulation never knows which device produced them.

use crate::sim::TickInput;

/// Raw input gathered between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub key_left: bool,
    pub key_right: bool,
    /// x positions (screen pixels) of active touches
    pub touches: Vec<f32>,
    /// One-shot pause request, consumed by [`InputState::take_tick_input`]
    pub pause_requested: bool,
    pub auto_play: bool,
}

impl InputState {
    /// Map a key name (DOM `KeyboardEvent.key` style) to a movement flag
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        match key {
            "ArrowLeft" | "a" | "A" => self.key_left = pressed,
            "ArrowRight" | "d" | "D" => self.key_right = pressed,
            "Escape" | "p" | "P" if pressed => self.pause_requested = true,
            _ => {}
        }
    }

    /// Touches on the left half steer left, right half steer right
    pub fn touch_intent(&self, screen_width: f32) -> (bool, bool) {
        let mid = screen_width / 2.0;
        let left = self.touches.iter().any(|&x| x < mid);
        let right = self.touches.iter().any(|&x| x >= mid);
        (left, right)
    }

    /// Combined intent for this frame; clears one-shot requests
    pub fn take_tick_input(&mut self, screen_width: f32) -> TickInput {
        let (touch_left, touch_right) = self.touch_intent(screen_width);
        let pause = std::mem::take(&mut self.pause_requested);
        TickInput {
            left: self.key_left || touch_left,
            right: self.key_right || touch_right,
            pause,
            auto_play: self.auto_play,
        }
    }
}
