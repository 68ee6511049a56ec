//! Score, lives, combo and the frenzy/golden multipliers
//!
//! Normal play fills the frenzy bar one fish at a time. A full bar starts a
//! frenzy, which bumps the stacking frenzy multiplier. Any damage empties the
//! bar and drops the stack back to 1.

use serde::{Deserialize, Serialize};

use super::hazard;
use super::state::{GameEvent, GameState};
use super::timer::Countdown;
use crate::consts::MAX_LIVES;
use crate::tuning::Tuning;

/// Result of collecting a fish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishOutcome {
    /// Points actually added (after multipliers)
    pub points: u64,
    /// The bar filled up and a frenzy must start
    pub frenzy_ready: bool,
}

/// Result of a damage event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Player was invincible; nothing changed
    Ignored,
    /// A life was lost
    Hit { lives_left: u8 },
}

/// Timers that ran out during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpiredTimers {
    pub frenzy: bool,
    pub golden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progression {
    pub score: u64,
    pub lives: u8,
    pub combo: u32,
    /// Fill level of the frenzy bar (0..=combo target)
    pub frenzy_progress: u32,
    /// Stacking multiplier, 1..=max
    pub frenzy_multiplier: u32,
    pub frenzy: Countdown,
    /// 1 normally, the golden multiplier while the golden window is open
    pub golden_multiplier: u32,
    pub golden: Countdown,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            score: 0,
            lives: MAX_LIVES,
            combo: 0,
            frenzy_progress: 0,
            frenzy_multiplier: 1,
            frenzy: Countdown::default(),
            golden_multiplier: 1,
            golden: Countdown::default(),
        }
    }
}

impl Progression {
    pub fn frenzy_active(&self) -> bool {
        self.frenzy.is_active()
    }

    /// golden × frenzy, never below 1
    pub fn effective_multiplier(&self) -> u64 {
        let m = self.golden_multiplier as u64 * self.frenzy_multiplier as u64;
        debug_assert!(m >= 1, "multiplier collapsed to {}", m);
        m.max(1)
    }

    /// Add base points scaled by the current multipliers. Returns points added.
    pub fn add_score(&mut self, base: u64) -> u64 {
        let points = base * self.effective_multiplier();
        self.score += points;
        points
    }

    /// Flat, unmultiplied bonus
    pub fn add_bonus(&mut self, points: u64) {
        self.score += points;
    }

    /// Score a fish and, outside a frenzy, advance the combo and frenzy bar
    pub fn collect_fish(&mut self, base: u64, tuning: &Tuning) -> FishOutcome {
        let points = self.add_score(base);
        let mut frenzy_ready = false;
        if !self.frenzy_active() {
            let target = tuning.frenzy_combo_target;
            self.combo = (self.combo + 1).min(target);
            self.frenzy_progress = (self.frenzy_progress + 1).min(target);
            frenzy_ready = self.frenzy_progress >= target;
        }
        FishOutcome {
            points,
            frenzy_ready,
        }
    }

    /// Open (or refresh) the golden window
    pub fn arm_golden(&mut self, tuning: &Tuning) {
        self.golden_multiplier = tuning.golden_multiplier;
        self.golden.start(tuning.golden_duration);
    }

    /// Enter frenzy: bump the stack, empty the bar
    pub fn start_frenzy(&mut self, tuning: &Tuning) {
        self.frenzy.start(tuning.frenzy_duration);
        self.frenzy_multiplier = (self.frenzy_multiplier + 1).min(tuning.max_frenzy_multiplier);
        self.combo = 0;
        self.frenzy_progress = 0;
    }

    /// Restore a life. Returns false when already at max.
    pub fn heal(&mut self) -> bool {
        if self.lives < MAX_LIVES {
            self.lives += 1;
            true
        } else {
            false
        }
    }

    /// Lose a life unless `invincible`; resets the combo chain and multiplier stack
    pub fn take_damage(&mut self, invincible: bool) -> DamageOutcome {
        if invincible {
            return DamageOutcome::Ignored;
        }
        debug_assert!(self.lives > 0, "damage applied with no lives left");
        self.lives = self.lives.saturating_sub(1);
        self.combo = 0;
        self.frenzy_progress = 0;
        self.frenzy_multiplier = 1;
        DamageOutcome::Hit {
            lives_left: self.lives,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    /// Advance the frenzy and golden windows
    pub fn tick_timers(&mut self, dt: f32) -> ExpiredTimers {
        let frenzy = self.frenzy.tick(dt);
        let golden = self.golden.tick(dt);
        if golden {
            self.golden_multiplier = 1;
        }
        ExpiredTimers { frenzy, golden }
    }

    /// Frenzy bar fill as a fraction in [0, 1]
    pub fn frenzy_fraction(&self, tuning: &Tuning) -> f32 {
        if self.frenzy_active() {
            return self.frenzy.remaining() / tuning.frenzy_duration.max(f32::EPSILON);
        }
        self.frenzy_progress as f32 / tuning.frenzy_combo_target.max(1) as f32
    }

    /// Pull out-of-range values back inside their documented bounds
    pub fn enforce_bounds(&mut self, tuning: &Tuning) {
        debug_assert!(self.lives <= MAX_LIVES, "lives out of range: {}", self.lives);
        debug_assert!(
            (1..=tuning.max_frenzy_multiplier).contains(&self.frenzy_multiplier),
            "frenzy multiplier out of range: {}",
            self.frenzy_multiplier
        );
        if self.lives > MAX_LIVES {
            log::warn!("lives {} clamped to {}", self.lives, MAX_LIVES);
            self.lives = MAX_LIVES;
        }
        self.frenzy_multiplier = self.frenzy_multiplier.clamp(1, tuning.max_frenzy_multiplier);
        if self.golden_multiplier != 1 && self.golden_multiplier != tuning.golden_multiplier {
            log::warn!("golden multiplier {} reset to 1", self.golden_multiplier);
            self.golden_multiplier = 1;
        }
        self.frenzy_progress = self.frenzy_progress.min(tuning.frenzy_combo_target);
    }
}

/// Start a frenzy and wipe the play field in the same tick: every falling
/// item, bird and hazard goes, along with any pending hazard warning.
pub fn enter_frenzy(state: &mut GameState) {
    state.progression.start_frenzy(&state.tuning);
    state.entities.clear();
    hazard::clear(state);
    state.stats.frenzies += 1;
    let multiplier = state.progression.frenzy_multiplier;
    log::info!("Frenzy! multiplier x{}", multiplier);
    state.emit(GameEvent::FrenzyStarted { multiplier });
}
