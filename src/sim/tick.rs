//! Frame tick
//!
//! Advances a run by one frame in a fixed phase order:
//! timers → player → play clock → entity motion → collisions → spawning →
//! hazard controller → hazard motion/collisions → bookkeeping.

use super::collision;
use super::entity::{Category, EntityKind};
use super::hazard;
use super::motion;
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left (key held or left touch zone)
    pub left: bool,
    /// Move right (key held or right touch zone)
    pub right: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - AI steers the boat
    pub auto_play: bool,
}

/// Clamp a frame delta into `[0, MAX_FRAME_DT]`
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring invalid frame delta {}", dt);
        return 0.0;
    }
    dt.min(MAX_FRAME_DT)
}

/// Advance the game state by one frame
///
/// `state.events` holds only this tick's events; anything not drained by the
/// caller is dropped at the start of the next tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    let dt = sanitize_dt(dt);

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::Finished => return,
        GamePhase::GameOver => {
            if state.game_over_timer.tick(dt) || !state.game_over_timer.is_active() {
                let score = state.progression.score;
                state.phase = GamePhase::Finished;
                log::info!("Run finished: score {}", score);
                state.emit(GameEvent::RunFinished { score });
            }
            return;
        }
        GamePhase::Playing => {}
    }

    // Timers
    state.player.tick(dt);
    let expired = state.progression.tick_timers(dt);
    if expired.frenzy {
        log::info!("Frenzy over");
        state.emit(GameEvent::FrenzyEnded);
    }

    // Player
    let (left, right) = if input.auto_play {
        auto_pilot(state)
    } else {
        (input.left, input.right)
    };
    motion::move_player(state, left, right, dt);

    // Play clock drives the difficulty curve
    state.elapsed += dt;

    // Falling items and birds
    motion::advance(state, Category::Falling, dt);
    motion::advance(state, Category::Flying, dt);

    // Collisions
    collision::resolve_birds(state);
    collision::resolve_player(state);
    if state.progression.is_dead() {
        game_over(state);
        return;
    }

    // Spawning
    spawner::tick(state, dt);

    // Hazards
    hazard::update(state, dt);
    motion::advance(state, Category::Hazard, dt);
    collision::resolve_hazards(state);
    if state.progression.is_dead() {
        game_over(state);
        return;
    }

    state.entities.flush();
    state.progression.enforce_bounds(&state.tuning);
    state.stats.best_multiplier = state
        .stats
        .best_multiplier
        .max(state.progression.effective_multiplier());
}

/// Terminal transition: clear the field and every timer, show game over
pub fn game_over(state: &mut GameState) {
    let score = state.progression.score;
    state.phase = GamePhase::GameOver;
    state.entities.clear();
    state.hazard.cancel(0.0);
    state.player.invincibility.clear();
    state.player.shielded = false;
    state.progression.frenzy.clear();
    state.progression.golden.clear();
    state.progression.golden_multiplier = 1;
    state.spawn_timer = 0.0;
    state.game_over_timer.start(state.tuning.game_over_delay);
    log::info!(
        "Game over: score {}, {:.1}s survived, {} fish",
        score,
        state.elapsed,
        state.stats.fish_collected
    );
    state.emit(GameEvent::GameOver { score });
}

/// Demo-mode steering: dodge obstacles and the shark lane, chase the nearest pickup
pub fn auto_pilot(state: &GameState) -> (bool, bool) {
    let px = state.player.x;
    let danger_width = PLAYER_WIDTH;
    let look_ahead = PLAYER_Y - 220.0;

    let mut threats: Vec<f32> = state
        .entities
        .iter()
        .filter(|(_, e)| match e.kind {
            EntityKind::Trash | EntityKind::FallingBird => {
                e.pos.y > look_ahead && e.pos.y < PLAYER_Y
            }
            EntityKind::Hazard => e.pos.y < PLAYER_Y,
            _ => false,
        })
        .map(|(_, e)| e.pos.x)
        .collect();
    if let Some(x) = state.hazard.warning_x() {
        threats.push(x);
    }
    let threatened = |x: f32| threats.iter().any(|t| (t - x).abs() < danger_width);

    let half = PLAYER_WIDTH / 2.0;
    let target = if threatened(px) {
        // Step aside to whichever side is clear, preferring the roomier one
        let left = (px - danger_width * 1.5).max(half);
        let right = (px + danger_width * 1.5).min(WORLD_WIDTH - half);
        match (threatened(left), threatened(right)) {
            (false, true) => left,
            (true, false) => right,
            _ if px > WORLD_WIDTH / 2.0 => left,
            _ => right,
        }
    } else {
        state
            .entities
            .iter()
            .filter(|(_, e)| {
                matches!(
                    e.kind,
                    EntityKind::Fish(_) | EntityKind::Heart | EntityKind::Shield
                ) && e.pos.y < PLAYER_Y
                    && !threatened(e.pos.x)
            })
            .max_by(|(_, a), (_, b)| a.pos.y.total_cmp(&b.pos.y))
            .map(|(_, e)| e.pos.x)
            .unwrap_or(px)
    };

    let delta = target - px;
    if delta.abs() < 8.0 {
        (false, false)
    } else {
        (delta < 0.0, delta > 0.0)
    }
}
