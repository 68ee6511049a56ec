//! Motion and lifecycle
//!
//! Moves the player and every entity of a category, and queues anything that
//! has left the world for removal. Removal is applied at end of frame.

use super::entity::Category;
use super::state::GameState;
use crate::consts::*;

/// Move the player from the left/right intent, clamped to the world
pub fn move_player(state: &mut GameState, left: bool, right: bool, dt: f32) {
    let dir = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    let half = PLAYER_WIDTH / 2.0;
    let player = &mut state.player;
    player.x = (player.x + dir * player.speed * dt).clamp(half, WORLD_WIDTH - half);
}

/// True once an entity is past the bottom, left or right edge by the margin
pub fn is_offscreen(pos: glam::Vec2) -> bool {
    pos.y > WORLD_HEIGHT + OFFSCREEN_MARGIN
        || pos.x < -OFFSCREEN_MARGIN
        || pos.x > WORLD_WIDTH + OFFSCREEN_MARGIN
}

/// Advance every entity in `category` and cull the ones that left the world
pub fn advance(state: &mut GameState, category: Category, dt: f32) {
    let mut gone = Vec::new();
    for (id, entity) in state.entities.iter_mut() {
        if entity.category() != category {
            continue;
        }
        entity.pos += entity.vel * dt;
        if entity.spinning {
            entity.rotation = (entity.rotation + FISH_SPIN_SPEED * dt) % std::f32::consts::TAU;
        }
        if is_offscreen(entity.pos) {
            gone.push(id);
        }
    }
    for id in gone {
        state.entities.despawn_later(id);
    }
}
