//! Read-only views of a run for the HUD and the renderer
//!
//! Built fresh every frame; nothing here is ever read back by the simulation.

use serde::Serialize;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{EntityKind, GamePhase, GameState};

/// Hazard warning marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WarningIndicator {
    pub x: f32,
    /// Blink state this frame (always true with reduced motion)
    pub visible: bool,
    pub remaining: f32,
}

/// Everything the HUD shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub max_lives: u8,
    pub combo: u32,
    /// Frenzy bar fill (0-1); drains over the frenzy while active
    pub frenzy_fraction: f32,
    pub frenzy_active: bool,
    pub frenzy_remaining: f32,
    /// golden × frenzy
    pub multiplier: u64,
    pub golden_remaining: f32,
    pub shield_remaining: f32,
    pub invincible: bool,
    pub hazard_warning: Option<WarningIndicator>,
}

impl HudSnapshot {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        let p = &state.progression;
        let hazard_warning = state.hazard.warning_x().map(|x| {
            let remaining = state.hazard.warning.remaining();
            let visible = !settings.flashing_warnings()
                || (remaining * HAZARD_WARNING_FLASH_HZ).fract() < 0.5;
            WarningIndicator {
                x,
                visible,
                remaining,
            }
        });
        Self {
            phase: state.phase,
            score: p.score,
            lives: p.lives,
            max_lives: MAX_LIVES,
            combo: p.combo,
            frenzy_fraction: p.frenzy_fraction(&state.tuning),
            frenzy_active: p.frenzy_active(),
            frenzy_remaining: p.frenzy.remaining(),
            multiplier: p.effective_multiplier(),
            golden_remaining: p.golden.remaining(),
            shield_remaining: if state.player.shielded {
                state.player.invincibility.remaining()
            } else {
                0.0
            },
            invincible: state.player.is_invincible(),
            hazard_warning,
        }
    }
}

/// Sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    BlueFish,
    RedFish,
    GoldenFish,
    Trash,
    Heart,
    Shield,
    Bird,
    FallingBird,
    Shark,
}

impl From<EntityKind> for SpriteKind {
    fn from(kind: EntityKind) -> Self {
        use crate::sim::FishKind;
        match kind {
            EntityKind::Fish(FishKind::Blue) => SpriteKind::BlueFish,
            EntityKind::Fish(FishKind::Red) => SpriteKind::RedFish,
            EntityKind::Fish(FishKind::Golden) => SpriteKind::GoldenFish,
            EntityKind::Trash => SpriteKind::Trash,
            EntityKind::Heart => SpriteKind::Heart,
            EntityKind::Shield => SpriteKind::Shield,
            EntityKind::Bird => SpriteKind::Bird,
            EntityKind::FallingBird => SpriteKind::FallingBird,
            EntityKind::Hazard => SpriteKind::Shark,
        }
    }
}

/// One sprite instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteView {
    pub kind: SpriteKind,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    /// Facing left (birds flying leftward)
    pub flip_x: bool,
    /// Shield tint on the player
    pub tinted: bool,
}

/// Render list: entities in registry order, then the player on top
pub fn sprites(state: &GameState) -> Vec<SpriteView> {
    let mut out: Vec<SpriteView> = state
        .entities
        .iter()
        .map(|(_, e)| SpriteView {
            kind: e.kind.into(),
            x: e.pos.x,
            y: e.pos.y,
            rotation: e.rotation,
            flip_x: e.vel.x < 0.0,
            tinted: false,
        })
        .collect();
    if state.phase != GamePhase::Finished {
        out.push(SpriteView {
            kind: SpriteKind::Player,
            x: state.player.x,
            y: PLAYER_Y,
            rotation: 0.0,
            flip_x: false,
            tinted: state.player.shielded,
        });
    }
    out
}
