//! Game state and core simulation types
//!
//! All per-run state lives here and is discarded when a run ends.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{FishKind, Registry};
use super::hazard::HazardState;
use super::progression::Progression;
use super::timer::Countdown;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Lives ran out; the game-over screen is showing
    GameOver,
    /// Run reported; waiting for "play again"
    Finished,
}

/// Things that happened during a tick, drained by the scene each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FishCollected { kind: FishKind, points: u64 },
    HeartCollected { healed: bool },
    ShieldCollected,
    DamageTaken { lives_left: u8 },
    /// A bird struck a fish and is falling
    BirdHit,
    /// Hazard warning has started at `x`
    HazardWarning { x: f32 },
    HazardSpawned { x: f32 },
    FrenzyStarted { multiplier: u32 },
    FrenzyEnded,
    GameOver { score: u64 },
    /// The game-over screen finished; the final score should be reported
    RunFinished { score: u64 },
}

/// The player's boat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal center; the player's only degree of freedom
    pub x: f32,
    pub speed: f32,
    /// Any invincibility (shield or post-hit)
    pub invincibility: Countdown,
    /// Invincibility comes from a shield (tinted)
    pub shielded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: WORLD_WIDTH / 2.0,
            speed: PLAYER_SPEED,
            invincibility: Countdown::default(),
            shielded: false,
        }
    }
}

impl Player {
    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_active()
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, PLAYER_Y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Shield: invincible for `seconds`, tinted. Never shortens existing cover.
    pub fn raise_shield(&mut self, seconds: f32) {
        self.invincibility.extend_to(seconds);
        self.shielded = true;
    }

    /// Post-hit grace period
    pub fn grant_hit_invincibility(&mut self, seconds: f32) {
        self.invincibility.extend_to(seconds);
    }

    pub fn tick(&mut self, dt: f32) {
        if self.invincibility.tick(dt) {
            self.shielded = false;
        }
    }
}

/// Per-run statistics for the leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub fish_collected: u32,
    pub best_multiplier: u64,
    pub frenzies: u32,
    pub hits_taken: u32,
}

fn unseeded_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete state of one run (deterministic given seed, tuning and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    #[serde(skip, default = "unseeded_rng")]
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Seconds of active play; drives the difficulty curve
    pub elapsed: f32,
    /// Accumulates toward the next wave
    pub spawn_timer: f32,
    /// Number of waves spawned (alternates the diagonal direction)
    pub waves_spawned: u32,
    pub player: Player,
    pub entities: Registry,
    pub progression: Progression,
    pub hazard: HazardState,
    /// Countdown of the game-over screen
    pub game_over_timer: Countdown,
    pub stats: RunStats,
    /// Events raised this tick; cleared when the next tick starts
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new run; out-of-range tuning values are clamped first
    pub fn with_tuning(seed: u64, mut tuning: Tuning) -> Self {
        tuning.validate();
        let hazard = HazardState::new(&tuning);
        Self {
            seed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            elapsed: 0.0,
            spawn_timer: 0.0,
            waves_spawned: 0,
            player: Player::default(),
            entities: Registry::new(),
            progression: Progression::default(),
            hazard,
            game_over_timer: Countdown::default(),
            stats: RunStats {
                best_multiplier: 1,
                ..Default::default()
            },
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take this tick's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }
}
