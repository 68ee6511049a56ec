//! Difficulty curve
//!
//! Pure functions of elapsed play time (and, for hazard cadence, score).
//! Nothing here touches the RNG: randomness is applied by the callers.

use serde::{Deserialize, Serialize};

use crate::lerp;
use crate::tuning::Tuning;

/// Difficulty at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySample {
    /// 0 at the start of a run, 1 once the horizon is reached
    pub ratio: f32,
    /// Seconds between waves
    pub spawn_interval: f32,
    /// Fall speed of collectibles and obstacles (px/s)
    pub fall_speed: f32,
    /// Horizontal speed of birds (px/s)
    pub bird_speed: f32,
    /// Fall speed of the hazard (px/s)
    pub hazard_speed: f32,
}

/// Difficulty ratio for elapsed play time, clamped to [0, 1]
pub fn ratio(tuning: &Tuning, elapsed: f32) -> f32 {
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0.0;
    }
    (elapsed / tuning.difficulty_horizon).min(1.0)
}

/// Sample the curve at `elapsed` seconds of play
pub fn sample(tuning: &Tuning, elapsed: f32) -> DifficultySample {
    let d = ratio(tuning, elapsed);
    DifficultySample {
        ratio: d,
        spawn_interval: lerp(tuning.spawn_interval_start, tuning.spawn_interval_end, d),
        fall_speed: lerp(tuning.fall_speed_start, tuning.fall_speed_end, d),
        bird_speed: lerp(tuning.bird_speed_start, tuning.bird_speed_end, d),
        hazard_speed: lerp(tuning.hazard_speed_start, tuning.hazard_speed_end, d),
    }
}

/// Chance that a non-frenzy wave slot is trash
pub fn trash_chance(tuning: &Tuning, elapsed: f32) -> f32 {
    lerp(
        tuning.trash_chance_start,
        tuning.trash_chance_end,
        ratio(tuning, elapsed),
    )
}

/// Bounds `(min, max)` of the hazard re-arm interval; tightens as score grows
pub fn hazard_interval_bounds(tuning: &Tuning, score: u64) -> (f32, f32) {
    let t = score.min(tuning.hazard_score_cap) as f32 / tuning.hazard_score_cap as f32;
    let min = lerp(tuning.hazard_min_interval_start, tuning.hazard_min_interval_end, t);
    let max = lerp(tuning.hazard_max_interval_start, tuning.hazard_max_interval_end, t);
    (min, max.max(min))
}
