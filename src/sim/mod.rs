//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (registry slot order)
//! - No rendering, audio or platform dependencies; side effects leave as `GameEvent`s

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod hazard;
pub mod motion;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::Hitbox;
pub use difficulty::DifficultySample;
pub use entity::{Category, Entity, EntityId, EntityKind, FishKind, Registry};
pub use hazard::{HazardPhase, HazardState};
pub use progression::{DamageOutcome, Progression};
pub use state::{GameEvent, GamePhase, GameState, Player, RunStats};
pub use tick::{TickInput, tick};
pub use timer::Countdown;
