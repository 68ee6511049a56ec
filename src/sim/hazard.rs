//! Shark hazard: Idle → Warning → Spawned → Idle
//!
//! A warning marker flashes at a fixed x for a moment, then a fast hazard
//! drops from above the screen at that x. The controller re-arms after a
//! random interval that shrinks as the score grows. Once spawned, hazards are
//! ordinary registry entities and several can be in flight at once.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty;
use super::entity::{Category, Entity, EntityKind};
use super::state::{GameEvent, GameState};
use super::timer::Countdown;
use crate::consts::*;
use crate::tuning::Tuning;

/// Hazard controller phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HazardPhase {
    /// Counting down to the next warning
    Idle,
    /// Warning shown at `x`
    Warning { x: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardState {
    pub phase: HazardPhase,
    pub warning: Countdown,
    pub cooldown: Countdown,
}

impl HazardState {
    /// Initial cooldown is the slowest cadence
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: HazardPhase::Idle,
            warning: Countdown::default(),
            cooldown: Countdown::new(tuning.hazard_max_interval_start),
        }
    }

    pub fn warning_active(&self) -> bool {
        matches!(self.phase, HazardPhase::Warning { .. })
    }

    pub fn warning_x(&self) -> Option<f32> {
        match self.phase {
            HazardPhase::Warning { x } => Some(x),
            HazardPhase::Idle => None,
        }
    }

    /// Drop any pending warning and restart the cooldown
    pub fn cancel(&mut self, cooldown: f32) {
        self.phase = HazardPhase::Idle;
        self.warning.clear();
        self.cooldown.start(cooldown);
    }
}

/// Draw the next re-arm interval for the current score
pub fn next_interval(state: &mut GameState) -> f32 {
    let (min, max) = difficulty::hazard_interval_bounds(&state.tuning, state.progression.score);
    state.rng.random_range(min..=max)
}

/// Hazards only arm once the player has some score and never during a frenzy
pub fn can_arm(state: &GameState) -> bool {
    state.progression.score >= state.tuning.hazard_score && !state.progression.frenzy_active()
}

/// Advance the warning/cooldown state machine by `dt`
pub fn update(state: &mut GameState, dt: f32) {
    if !can_arm(state) {
        if state.hazard.warning_active() {
            let cooldown = next_interval(state);
            state.hazard.cancel(cooldown);
        }
        return;
    }

    match state.hazard.phase {
        HazardPhase::Idle => {
            if state.hazard.cooldown.tick(dt) || !state.hazard.cooldown.is_active() {
                let x = state
                    .rng
                    .random_range(HAZARD_WARNING_MARGIN..=WORLD_WIDTH - HAZARD_WARNING_MARGIN);
                state.hazard.phase = HazardPhase::Warning { x };
                state.hazard.warning.start(state.tuning.hazard_warning_duration);
                log::info!("Shark warning at x={:.0}", x);
                state.emit(GameEvent::HazardWarning { x });
            }
        }
        HazardPhase::Warning { x } => {
            if state.hazard.warning.tick(dt) || !state.hazard.warning.is_active() {
                spawn_hazard(state, x);
                let cooldown = next_interval(state);
                state.hazard.phase = HazardPhase::Idle;
                state.hazard.cooldown.start(cooldown);
            }
        }
    }
}

fn spawn_hazard(state: &mut GameState, x: f32) {
    let sample = difficulty::sample(&state.tuning, state.elapsed);
    let half_height = EntityKind::Hazard.size().y / 2.0;
    state.entities.spawn(Entity::new(
        EntityKind::Hazard,
        Vec2::new(x, -half_height),
        Vec2::new(0.0, sample.hazard_speed),
    ));
    log::debug!("Shark spawned at x={:.0}, speed={:.0}", x, sample.hazard_speed);
    state.emit(GameEvent::HazardSpawned { x });
}

/// Remove hazards and any warning (frenzy start, game over)
pub fn clear(state: &mut GameState) {
    state.entities.clear_category(Category::Hazard);
    let cooldown = next_interval(state);
    state.hazard.cancel(cooldown);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed_state() -> GameState {
        let mut state = GameState::new(42);
        state.progression.score = 150;
        state.hazard.cooldown.start(0.5);
        state
    }

    #[test]
    fn test_no_warning_below_score_gate() {
        let mut state = GameState::new(42);
        state.hazard.cooldown.start(0.1);
        for _ in 0..100 {
            update(&mut state, 0.1);
        }
        assert!(!state.hazard.warning_active());
        assert_eq!(state.entities.count(Category::Hazard), 0);
    }

    #[test]
    fn test_warning_then_spawn() {
        let mut state = armed_state();
        update(&mut state, 0.5);
        let x = state.hazard.warning_x().expect("warning should be active");
        assert!((HAZARD_WARNING_MARGIN..=WORLD_WIDTH - HAZARD_WARNING_MARGIN).contains(&x));
        assert!(state.events.contains(&GameEvent::HazardWarning { x }));

        // Warning lasts 1.5s
        update(&mut state, 1.0);
        assert!(state.hazard.warning_active());
        update(&mut state, 0.5);
        assert!(!state.hazard.warning_active());

        let hazards: Vec<_> = state
            .entities
            .iter()
            .filter(|(_, e)| e.kind == EntityKind::Hazard)
            .map(|(_, e)| e.clone())
            .collect();
        assert_eq!(hazards.len(), 1);
        assert_eq!(hazards[0].pos.x, x);
        assert!(hazards[0].pos.y < 0.0);
        assert_eq!(hazards[0].vel.y, 700.0);

        // Re-armed with a score-scaled interval
        let (min, max) = difficulty::hazard_interval_bounds(&state.tuning, 150);
        let cooldown = state.hazard.cooldown.remaining();
        assert!(cooldown >= min && cooldown <= max);
    }

    #[test]
    fn test_frenzy_cancels_warning() {
        let mut state = armed_state();
        update(&mut state, 0.5);
        assert!(state.hazard.warning_active());

        state.progression.start_frenzy(&state.tuning);
        update(&mut state, 0.1);
        assert!(!state.hazard.warning_active());
        assert!(state.hazard.cooldown.is_active());
    }

    #[test]
    fn test_multiple_hazards_in_flight() {
        let mut state = armed_state();
        for _ in 0..2 {
            state.hazard.cooldown.start(0.1);
            update(&mut state, 0.1);
            update(&mut state, 1.5);
        }
        assert_eq!(state.entities.count(Category::Hazard), 2);
    }
}
