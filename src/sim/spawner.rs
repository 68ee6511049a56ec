//! Wave spawning
//!
//! Each time the spawn timer reaches the current interval, one wave of items
//! drops in a diagonal line. Item mix depends on score gates and difficulty;
//! during a frenzy only fish fall. Birds occasionally cross the screen.

use glam::Vec2;
use rand::Rng;

use super::difficulty::{self, DifficultySample};
use super::entity::{Entity, EntityKind, FishKind};
use super::state::GameState;
use crate::consts::*;
use crate::tuning::Tuning;

/// Advance the spawn timer; spawn a wave when it comes due
pub fn tick(state: &mut GameState, dt: f32) {
    let sample = difficulty::sample(&state.tuning, state.elapsed);
    state.spawn_timer += dt;
    if state.spawn_timer >= sample.spawn_interval {
        state.spawn_timer = 0.0;
        spawn_wave(state, &sample);
    }
}

/// Fish kinds unlocked at `score`
pub fn eligible_fish(tuning: &Tuning, score: u64) -> Vec<FishKind> {
    let mut kinds = vec![FishKind::Blue];
    if score >= tuning.red_fish_score {
        kinds.push(FishKind::Red);
    }
    if score >= tuning.golden_fish_score {
        kinds.push(FishKind::Golden);
    }
    kinds
}

/// Map a uniform roll in [0, 1) to a non-frenzy item
///
/// Trash takes the first slice, then heart and shield (when unlocked);
/// fish get the rest. `fish_roll` picks uniformly among unlocked fish.
pub fn pick_item(
    tuning: &Tuning,
    score: u64,
    trash_chance: f32,
    roll: f32,
    fish_roll: f32,
) -> EntityKind {
    if roll < trash_chance {
        return EntityKind::Trash;
    }
    let mut threshold = trash_chance;
    if score >= tuning.heart_score {
        threshold += tuning.heart_chance;
        if roll < threshold {
            return EntityKind::Heart;
        }
    }
    if score >= tuning.shield_score {
        threshold += tuning.shield_chance;
        if roll < threshold {
            return EntityKind::Shield;
        }
    }
    EntityKind::Fish(pick_fish(tuning, score, fish_roll))
}

fn pick_fish(tuning: &Tuning, score: u64, fish_roll: f32) -> FishKind {
    let kinds = eligible_fish(tuning, score);
    let index = ((fish_roll.clamp(0.0, 1.0) * kinds.len() as f32) as usize).min(kinds.len() - 1);
    kinds[index]
}

/// Keep a sprite of width `width` fully inside the world
pub fn clamp_spawn_x(x: f32, width: f32) -> f32 {
    let half = width / 2.0;
    x.clamp(half, WORLD_WIDTH - half)
}

/// Horizontal offset of wave item `index` from the first item
///
/// Items alternate sides, stepping one column further out each time:
/// 0, +70, -140, +210, ... (mirrored when `direction` is negative).
pub fn wave_offset(index: u32, direction: f32) -> f32 {
    let side = if index % 2 == 1 { direction } else { -direction };
    side * index as f32 * WAVE_COLUMN_STEP
}

/// Spawn one wave (and maybe a bird)
pub fn spawn_wave(state: &mut GameState, sample: &DifficultySample) {
    let frenzy = state.progression.frenzy_active();
    let tuning = &state.tuning;
    let (min, max) = if frenzy {
        (tuning.frenzy_wave_size_min, tuning.frenzy_wave_size_max)
    } else {
        (tuning.wave_size_min, tuning.wave_size_max)
    };
    let count = state.rng.random_range(min..=max);
    let trash_chance = difficulty::trash_chance(&state.tuning, state.elapsed);
    let score = state.progression.score;

    // Which side the zigzag opens toward alternates wave to wave
    let direction = if state.waves_spawned % 2 == 0 { 1.0 } else { -1.0 };
    let offsets: Vec<f32> = (0..count).map(|i| wave_offset(i, direction)).collect();
    let left_reach = offsets.iter().copied().fold(0.0f32, f32::min);
    let right_reach = offsets.iter().copied().fold(0.0f32, f32::max);
    // Pick the anchor so the whole line fits; clamping is only a fallback
    let half_fish = FISH_SIZE.0 / 2.0;
    let low = half_fish - left_reach;
    let high = WORLD_WIDTH - half_fish - right_reach;
    let start_x = if low <= high {
        state.rng.random_range(low..=high)
    } else {
        WORLD_WIDTH / 2.0
    };

    for index in 0..count {
        let fish_roll: f32 = state.rng.random();
        let kind = if frenzy {
            EntityKind::Fish(pick_fish(&state.tuning, score, fish_roll))
        } else {
            let roll: f32 = state.rng.random();
            pick_item(&state.tuning, score, trash_chance, roll, fish_roll)
        };

        let x = clamp_spawn_x(start_x + offsets[index as usize], kind.size().x);
        let y = WAVE_START_Y - index as f32 * WAVE_ROW_SPACING;
        state.entities.spawn(Entity::new(
            kind,
            Vec2::new(x, y),
            Vec2::new(0.0, sample.fall_speed),
        ));
    }
    state.waves_spawned += 1;
    log::debug!(
        "Wave {}: {} items, frenzy={}, fall={:.0}",
        state.waves_spawned,
        count,
        frenzy,
        sample.fall_speed
    );

    if !frenzy && state.rng.random_bool(state.tuning.bird_chance as f64) {
        spawn_bird(state, sample);
    }
}

/// Send a bird across from a random edge at the fixed flight height
pub fn spawn_bird(state: &mut GameState, sample: &DifficultySample) {
    let half_width = BIRD_SIZE.0 / 2.0;
    let from_left = state.rng.random_bool(0.5);
    let (x, vx) = if from_left {
        (-half_width, sample.bird_speed)
    } else {
        (WORLD_WIDTH + half_width, -sample.bird_speed)
    };
    state.entities.spawn(Entity::new(
        EntityKind::Bird,
        Vec2::new(x, BIRD_FLIGHT_Y),
        Vec2::new(vx, 0.0),
    ));
    log::debug!("Bird spawned from the {}", if from_left { "left" } else { "right" });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Category;

    #[test]
    fn test_score_gates() {
        let tuning = Tuning::default();
        assert_eq!(eligible_fish(&tuning, 0), vec![FishKind::Blue]);
        assert_eq!(eligible_fish(&tuning, 150), vec![FishKind::Blue, FishKind::Red]);
        assert_eq!(eligible_fish(&tuning, 200).len(), 3);

        // Heart/shield slices only exist once unlocked
        assert!(pick_item(&tuning, 0, 0.15, 0.16, 0.0).is_fish());
        assert_eq!(pick_item(&tuning, 250, 0.15, 0.16, 0.0), EntityKind::Heart);
        assert!(pick_item(&tuning, 250, 0.15, 0.18, 0.0).is_fish());
        assert_eq!(pick_item(&tuning, 500, 0.15, 0.18, 0.0), EntityKind::Shield);
        assert_eq!(pick_item(&tuning, 500, 0.15, 0.10, 0.0), EntityKind::Trash);
    }

    #[test]
    fn test_fish_pick_is_uniform_over_eligible() {
        let tuning = Tuning::default();
        let pick = |r| pick_item(&tuning, 300, 0.0, 0.99, r);
        assert_eq!(pick(0.0), EntityKind::Fish(FishKind::Blue));
        assert_eq!(pick(0.5), EntityKind::Fish(FishKind::Red));
        assert_eq!(pick(0.99), EntityKind::Fish(FishKind::Golden));
        assert_eq!(pick(1.0), EntityKind::Fish(FishKind::Golden));
    }

    #[test]
    fn test_spawn_x_clamped() {
        assert_eq!(clamp_spawn_x(-100.0, 40.0), 20.0);
        assert_eq!(clamp_spawn_x(10_000.0, 40.0), WORLD_WIDTH - 20.0);
    }

    #[test]
    fn test_wave_geometry() {
        let mut state = GameState::new(11);
        state.tuning.bird_chance = 0.0;
        let sample = difficulty::sample(&state.tuning, 0.0);
        for _ in 0..50 {
            state.entities.clear();
            spawn_wave(&mut state, &sample);
            let mut items: Vec<_> = state.entities.iter().map(|(_, e)| e.clone()).collect();
            items.sort_by(|a, b| b.pos.y.total_cmp(&a.pos.y));
            assert!((1..=3).contains(&items.len()));
            let x0 = items[0].pos.x;
            for (index, item) in items.iter().enumerate() {
                let half = item.kind.size().x / 2.0;
                assert!(item.pos.x >= half && item.pos.x <= WORLD_WIDTH - half);
                assert_eq!(item.pos.y, -50.0 - index as f32 * 100.0);
                assert_eq!(item.vel.y, 200.0);
                // Never clamped into a column: each item sits its full step out
                let d = item.pos.x - x0;
                assert!((d.abs() - index as f32 * WAVE_COLUMN_STEP).abs() < 1e-3);
            }
            if items.len() == 3 {
                let d1 = items[1].pos.x - x0;
                let d2 = items[2].pos.x - x0;
                assert!(d1.signum() != d2.signum(), "d1={} d2={}", d1, d2);
            }
        }
    }

    #[test]
    fn test_wave_offsets_alternate_sides() {
        assert_eq!(wave_offset(0, 1.0), 0.0);
        assert_eq!(wave_offset(1, 1.0), 70.0);
        assert_eq!(wave_offset(2, 1.0), -140.0);
        assert_eq!(wave_offset(3, 1.0), 210.0);
        assert_eq!(wave_offset(1, -1.0), -70.0);
        assert_eq!(wave_offset(2, -1.0), 140.0);
    }

    #[test]
    fn test_frenzy_wave_fits_without_clamping() {
        let mut state = GameState::new(21);
        state.progression.start_frenzy(&state.tuning);
        let sample = difficulty::sample(&state.tuning, 0.0);
        for _ in 0..100 {
            state.entities.clear();
            spawn_wave(&mut state, &sample);
            let mut xs: Vec<f32> = state.entities.iter().map(|(_, e)| e.pos.x).collect();
            xs.sort_by(f32::total_cmp);
            xs.dedup();
            assert_eq!(xs.len(), state.entities.len());
        }
    }

    #[test]
    fn test_frenzy_waves_are_all_fish() {
        let mut state = GameState::new(5);
        state.progression.start_frenzy(&state.tuning);
        state.elapsed = 90.0;
        let sample = difficulty::sample(&state.tuning, state.elapsed);
        for _ in 0..50 {
            state.entities.clear();
            spawn_wave(&mut state, &sample);
            assert!((3..=5).contains(&state.entities.len()));
            assert!(state.entities.iter().all(|(_, e)| e.kind.is_fish()));
        }
    }

    #[test]
    fn test_spawn_timer() {
        let mut state = GameState::new(1);
        tick(&mut state, 1.9);
        assert!(state.entities.is_empty());
        tick(&mut state, 0.2);
        assert!(!state.entities.is_empty());
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_bird_enters_from_edge() {
        let mut state = GameState::new(9);
        let sample = difficulty::sample(&state.tuning, 0.0);
        spawn_bird(&mut state, &sample);
        let (_, bird) = state.entities.iter().next().unwrap();
        assert_eq!(bird.category(), Category::Flying);
        assert_eq!(bird.pos.y, BIRD_FLIGHT_Y);
        assert_eq!(bird.vel.x.abs(), 100.0);
        assert!(bird.pos.x < 0.0 || bird.pos.x > WORLD_WIDTH);
        assert_eq!(bird.vel.x > 0.0, bird.pos.x < 0.0);
    }
}
