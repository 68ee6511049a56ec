//! Collision detection and response
//!
//! Everything collides as axis-aligned rectangles shrunk inward by a
//! per-kind margin: pickups get a forgiving box, obstacles a tight one.
//! Resolution order within a frame is bird-vs-fish, then player-vs-falling,
//! then hazards. Consumed entities are queued, never removed mid-pass, and an
//! entity already queued is skipped so nothing is resolved twice.

use glam::Vec2;

use super::difficulty;
use super::entity::{Category, EntityKind, FishKind};
use super::progression::{DamageOutcome, enter_frenzy};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Axis-aligned hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Hitbox {
    /// Sprite rect centered on `pos`, shrunk by `margin` on every side
    pub fn shrunk(pos: Vec2, size: Vec2, margin: f32) -> Self {
        let half = (size / 2.0 - Vec2::splat(margin)).max(Vec2::ZERO);
        Self {
            min: pos - half,
            max: pos + half,
        }
    }

    /// Strict overlap: touching edges do not collide
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

pub fn entity_hitbox(kind: EntityKind, pos: Vec2) -> Hitbox {
    Hitbox::shrunk(pos, kind.size(), kind.hitbox_margin())
}

pub fn player_hitbox(state: &GameState) -> Hitbox {
    Hitbox::shrunk(state.player.pos(), state.player.size(), PLAYER_HITBOX_MARGIN)
}

/// Base points for a fish
pub fn fish_points(state: &GameState, kind: FishKind) -> u64 {
    match kind {
        FishKind::Blue => state.tuning.blue_fish_points,
        FishKind::Red => state.tuning.red_fish_points,
        FishKind::Golden => state.tuning.golden_fish_points,
    }
}

/// Birds that fly into a fish knock it spinning and drop out of the sky
pub fn resolve_birds(state: &mut GameState) {
    let birds = state.entities.ids(Category::Flying);
    if birds.is_empty() {
        return;
    }
    let fish: Vec<_> = state
        .entities
        .iter()
        .filter(|(_, e)| e.kind.is_fish() && !e.spinning)
        .map(|(id, e)| (id, entity_hitbox(e.kind, e.pos)))
        .collect();
    // Falling birds inherit the fall speed at the moment they are hit
    let fall_speed = difficulty::sample(&state.tuning, state.elapsed).fall_speed;

    for bird_id in birds {
        let Some(bird) = state.entities.get(bird_id) else {
            continue;
        };
        let bird_pos = bird.pos;
        let bird_dir = bird.vel.x.signum();
        let bird_box = entity_hitbox(bird.kind, bird_pos);

        let struck = fish.iter().find(|(fish_id, fish_box)| {
            bird_box.overlaps(fish_box)
                && state
                    .entities
                    .get(*fish_id)
                    .is_some_and(|f| !f.spinning && state.entities.is_active(*fish_id))
        });
        let Some(&(fish_id, _)) = struck else {
            continue;
        };

        if let Some(fish) = state.entities.get_mut(fish_id) {
            let away = if fish.pos.x == bird_pos.x {
                bird_dir
            } else {
                (fish.pos.x - bird_pos.x).signum()
            };
            fish.pos.x += away * FISH_BOUNCE_DISTANCE;
            fish.pos.y -= FISH_BOUNCE_DISTANCE / 2.0;
            fish.vel.x = away * FISH_BOUNCE_SPEED;
            fish.spinning = true;
        }
        if let Some(bird) = state.entities.get_mut(bird_id) {
            bird.kind = EntityKind::FallingBird;
            bird.vel = Vec2::new(0.0, fall_speed);
        }
        log::debug!("Bird hit a fish at x={:.0}", bird_pos.x);
        state.emit(GameEvent::BirdHit);
    }
}

/// Player against every falling entity
pub fn resolve_player(state: &mut GameState) {
    let player_box = player_hitbox(state);
    for id in state.entities.ids(Category::Falling) {
        // May have been consumed, or wiped by a frenzy, earlier in this pass
        if !state.entities.is_active(id) {
            continue;
        }
        let Some(entity) = state.entities.get(id) else {
            continue;
        };
        let kind = entity.kind;
        if !player_box.overlaps(&entity_hitbox(kind, entity.pos)) {
            continue;
        }

        match kind {
            EntityKind::Fish(fish) => {
                state.entities.despawn_later(id);
                collect_fish(state, fish);
            }
            EntityKind::Heart => {
                state.entities.despawn_later(id);
                let healed = state.progression.heal();
                if !healed {
                    state.progression.add_bonus(state.tuning.full_heart_bonus);
                }
                state.emit(GameEvent::HeartCollected { healed });
            }
            EntityKind::Shield => {
                state.entities.despawn_later(id);
                state.player.raise_shield(state.tuning.shield_duration);
                state.emit(GameEvent::ShieldCollected);
            }
            EntityKind::Trash | EntityKind::FallingBird => {
                // Invincible players pass straight through obstacles
                if !state.player.is_invincible() {
                    state.entities.despawn_later(id);
                    damage_player(state);
                }
            }
            EntityKind::Bird | EntityKind::Hazard => {}
        }

        if state.progression.is_dead() {
            return;
        }
    }
}

fn collect_fish(state: &mut GameState, fish: FishKind) {
    let base = fish_points(state, fish);
    let outcome = state.progression.collect_fish(base, &state.tuning);
    if fish == FishKind::Golden {
        state.progression.arm_golden(&state.tuning);
    }
    state.stats.fish_collected += 1;
    state.emit(GameEvent::FishCollected {
        kind: fish,
        points: outcome.points,
    });
    if outcome.frenzy_ready {
        enter_frenzy(state);
    }
}

/// Hazards eat falling entities and bite the player
pub fn resolve_hazards(state: &mut GameState) {
    for hazard_id in state.entities.ids(Category::Hazard) {
        let Some(hazard) = state.entities.get(hazard_id) else {
            continue;
        };
        let hazard_box = entity_hitbox(hazard.kind, hazard.pos);

        let eaten: Vec<_> = state
            .entities
            .iter()
            .filter(|(_, e)| e.category() == Category::Falling)
            .filter(|(_, e)| hazard_box.overlaps(&entity_hitbox(e.kind, e.pos)))
            .map(|(id, _)| id)
            .collect();
        for id in eaten {
            state.entities.despawn_later(id);
        }

        if !state.player.is_invincible()
            && state.entities.is_active(hazard_id)
            && hazard_box.overlaps(&player_hitbox(state))
        {
            state.entities.despawn_later(hazard_id);
            damage_player(state);
            if state.progression.is_dead() {
                return;
            }
        }
    }
}

/// Lose a life unless invincible; a hit grants a short grace period
pub fn damage_player(state: &mut GameState) -> DamageOutcome {
    let outcome = state.progression.take_damage(state.player.is_invincible());
    if let DamageOutcome::Hit { lives_left } = outcome {
        state
            .player
            .grant_hit_invincibility(state.tuning.hit_invincibility);
        state.stats.hits_taken += 1;
        log::info!("Player hit, {} lives left", lives_left);
        state.emit(GameEvent::DamageTaken { lives_left });
    }
    outcome
}
