//! Data-driven game balance
//!
//! Every gameplay number that a designer might want to tweak lives here.
//! Missing keys in a JSON override fall back to the defaults, so a minimal
//! file can override just the values you care about.

use serde::{Deserialize, Serialize};

/// Gameplay balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty curve ===
    /// Seconds of play until difficulty is maxed out
    pub difficulty_horizon: f32,
    pub spawn_interval_start: f32,
    pub spawn_interval_end: f32,
    pub fall_speed_start: f32,
    pub fall_speed_end: f32,
    pub bird_speed_start: f32,
    pub bird_speed_end: f32,
    pub hazard_speed_start: f32,
    pub hazard_speed_end: f32,

    // === Hazard re-arm (scales with score) ===
    pub hazard_score_cap: u64,
    pub hazard_min_interval_start: f32,
    pub hazard_min_interval_end: f32,
    pub hazard_max_interval_start: f32,
    pub hazard_max_interval_end: f32,
    pub hazard_warning_duration: f32,

    // === Score gates ===
    pub red_fish_score: u64,
    pub golden_fish_score: u64,
    pub heart_score: u64,
    pub shield_score: u64,
    pub hazard_score: u64,

    // === Spawn mix ===
    pub trash_chance_start: f32,
    pub trash_chance_end: f32,
    pub heart_chance: f32,
    pub shield_chance: f32,
    pub bird_chance: f32,
    pub wave_size_min: u32,
    pub wave_size_max: u32,
    pub frenzy_wave_size_min: u32,
    pub frenzy_wave_size_max: u32,

    // === Scoring ===
    pub blue_fish_points: u64,
    pub red_fish_points: u64,
    pub golden_fish_points: u64,
    /// Flat bonus for a heart collected at full health
    pub full_heart_bonus: u64,

    // === Power-ups and timers ===
    pub golden_multiplier: u32,
    pub golden_duration: f32,
    pub shield_duration: f32,
    pub hit_invincibility: f32,
    pub frenzy_duration: f32,
    /// Fish in a row needed to fill the frenzy bar
    pub frenzy_combo_target: u32,
    pub max_frenzy_multiplier: u32,
    /// Seconds the game-over screen shows before the run is reported
    pub game_over_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            difficulty_horizon: 90.0,
            spawn_interval_start: 2.0,
            spawn_interval_end: 0.8,
            fall_speed_start: 200.0,
            fall_speed_end: 550.0,
            bird_speed_start: 100.0,
            bird_speed_end: 250.0,
            hazard_speed_start: 700.0,
            hazard_speed_end: 1300.0,

            hazard_score_cap: 2000,
            hazard_min_interval_start: 6.0,
            hazard_min_interval_end: 3.0,
            hazard_max_interval_start: 9.0,
            hazard_max_interval_end: 5.0,
            hazard_warning_duration: 1.5,

            red_fish_score: 150,
            golden_fish_score: 200,
            heart_score: 250,
            shield_score: 500,
            hazard_score: 100,

            trash_chance_start: 0.15,
            trash_chance_end: 0.50,
            heart_chance: 0.02,
            shield_chance: 0.02,
            bird_chance: 0.20,
            wave_size_min: 1,
            wave_size_max: 3,
            frenzy_wave_size_min: 3,
            frenzy_wave_size_max: 5,

            blue_fish_points: 10,
            red_fish_points: 20,
            golden_fish_points: 50,
            full_heart_bonus: 50,

            golden_multiplier: 3,
            golden_duration: 7.0,
            shield_duration: 5.0,
            hit_invincibility: 1.0,
            frenzy_duration: 10.0,
            frenzy_combo_target: 20,
            max_frenzy_multiplier: 5,
            game_over_delay: 2.0,
        }
    }
}

impl Tuning {
    /// Parse a (partial) tuning override from JSON and sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate();
        Ok(tuning)
    }

    /// Clamp values that would break the simulation (zero intervals, inverted ranges)
    pub fn validate(&mut self) {
        fn at_least(name: &str, value: &mut f32, min: f32) {
            if !value.is_finite() || *value < min {
                log::warn!("tuning: {} = {} is out of range, using {}", name, value, min);
                *value = min;
            }
        }

        at_least("difficulty_horizon", &mut self.difficulty_horizon, 1.0);
        at_least("spawn_interval_start", &mut self.spawn_interval_start, 0.05);
        at_least("spawn_interval_end", &mut self.spawn_interval_end, 0.05);
        at_least("hazard_min_interval_start", &mut self.hazard_min_interval_start, 0.5);
        at_least("hazard_min_interval_end", &mut self.hazard_min_interval_end, 0.5);
        at_least("hazard_warning_duration", &mut self.hazard_warning_duration, 0.0);
        at_least("game_over_delay", &mut self.game_over_delay, 0.0);

        if self.hazard_max_interval_start < self.hazard_min_interval_start {
            log::warn!("tuning: hazard_max_interval_start below min, raising it");
            self.hazard_max_interval_start = self.hazard_min_interval_start;
        }
        if self.hazard_max_interval_end < self.hazard_min_interval_end {
            log::warn!("tuning: hazard_max_interval_end below min, raising it");
            self.hazard_max_interval_end = self.hazard_min_interval_end;
        }

        for chance in [
            &mut self.trash_chance_start,
            &mut self.trash_chance_end,
            &mut self.heart_chance,
            &mut self.shield_chance,
            &mut self.bird_chance,
        ] {
            *chance = if chance.is_finite() { chance.clamp(0.0, 1.0) } else { 0.0 };
        }

        self.wave_size_min = self.wave_size_min.max(1);
        self.wave_size_max = self.wave_size_max.max(self.wave_size_min);
        self.frenzy_wave_size_min = self.frenzy_wave_size_min.max(1);
        self.frenzy_wave_size_max = self.frenzy_wave_size_max.max(self.frenzy_wave_size_min);
        self.frenzy_combo_target = self.frenzy_combo_target.max(1);
        self.max_frenzy_multiplier = self.max_frenzy_multiplier.max(1);
        self.golden_multiplier = self.golden_multiplier.max(1);
        self.hazard_score_cap = self.hazard_score_cap.max(1);
    }
}
