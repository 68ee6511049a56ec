//! Fish Frenzy - A falling-fish arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, progression)
//! - `platform`: Collaborator interfaces (input, audio cues, platform SDK)
//! - `scene`: Frame driver wiring the simulation to its collaborators
//! - `ui`: Read-only per-frame snapshots for the HUD and renderer
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;
mod storage;
pub mod tuning;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScores;
pub use scene::Scene;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta accepted by a single tick (avoids tunneling after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions (pixels, origin top-left, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Entities this far past the bottom/left/right edge are culled
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Player (boat) defaults - moves along a single row near the bottom
    pub const PLAYER_Y: f32 = WORLD_HEIGHT - 60.0;
    pub const PLAYER_WIDTH: f32 = 96.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_SPEED: f32 = 450.0;
    pub const PLAYER_HITBOX_MARGIN: f32 = 8.0;

    /// Sprite sizes (width, height)
    pub const FISH_SIZE: (f32, f32) = (48.0, 32.0);
    pub const TRASH_SIZE: (f32, f32) = (40.0, 40.0);
    pub const HEART_SIZE: (f32, f32) = (32.0, 32.0);
    pub const SHIELD_SIZE: (f32, f32) = (36.0, 36.0);
    pub const BIRD_SIZE: (f32, f32) = (56.0, 40.0);
    pub const HAZARD_SIZE: (f32, f32) = (64.0, 128.0);

    /// Inward hitbox margins: forgiving for pickups, tight for obstacles
    pub const FISH_HITBOX_MARGIN: f32 = 6.0;
    pub const PICKUP_HITBOX_MARGIN: f32 = 6.0;
    pub const OBSTACLE_HITBOX_MARGIN: f32 = 12.0;
    pub const BIRD_HITBOX_MARGIN: f32 = 8.0;
    pub const HAZARD_HITBOX_MARGIN: f32 = 14.0;

    /// Wave geometry
    pub const WAVE_START_Y: f32 = -50.0;
    pub const WAVE_ROW_SPACING: f32 = 100.0;
    pub const WAVE_COLUMN_STEP: f32 = 70.0;

    /// Birds cross the screen at a fixed height
    pub const BIRD_FLIGHT_Y: f32 = 150.0;

    /// Bounce applied to a fish struck by a bird
    pub const FISH_BOUNCE_DISTANCE: f32 = 40.0;
    pub const FISH_BOUNCE_SPEED: f32 = 120.0;
    pub const FISH_SPIN_SPEED: f32 = 8.0; // radians per second

    /// Hazard warnings are placed inside this margin from either edge
    pub const HAZARD_WARNING_MARGIN: f32 = 80.0;
    /// Warning indicator blink rate while flashing
    pub const HAZARD_WARNING_FLASH_HZ: f32 = 6.0;

    /// Lives
    pub const MAX_LIVES: u8 = 3;
}

/// Linear interpolation between `a` and `b` with `t` clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
