//! Entities and the slot arena that owns them
//!
//! Every falling item, bird and hazard lives in one generational slot map,
//! iterated in slot order so runs stay deterministic.
//! Removal requested during a pass is queued and applied by [`Registry::flush`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use crate::consts::*;

/// Fish varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishKind {
    Blue,
    Red,
    Golden,
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Fish(FishKind),
    Trash,
    Heart,
    Shield,
    /// Flying horizontally across the screen
    Bird,
    /// A bird knocked out of the sky by a fish; an obstacle
    FallingBird,
    /// The shark: a fast falling threat announced by a warning
    Hazard,
}

/// Which set an entity belongs to for motion and collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Falling,
    Flying,
    Hazard,
}

impl EntityKind {
    pub fn category(&self) -> Category {
        match self {
            EntityKind::Bird => Category::Flying,
            EntityKind::Hazard => Category::Hazard,
            _ => Category::Falling,
        }
    }

    /// Sprite size (width, height)
    pub fn size(&self) -> Vec2 {
        let (w, h) = match self {
            EntityKind::Fish(_) => FISH_SIZE,
            EntityKind::Trash => TRASH_SIZE,
            EntityKind::Heart => HEART_SIZE,
            EntityKind::Shield => SHIELD_SIZE,
            EntityKind::Bird | EntityKind::FallingBird => BIRD_SIZE,
            EntityKind::Hazard => HAZARD_SIZE,
        };
        Vec2::new(w, h)
    }

    /// Inward margin applied to the sprite rect to get the hitbox
    pub fn hitbox_margin(&self) -> f32 {
        match self {
            EntityKind::Fish(_) => FISH_HITBOX_MARGIN,
            EntityKind::Heart | EntityKind::Shield => PICKUP_HITBOX_MARGIN,
            EntityKind::Trash | EntityKind::FallingBird => OBSTACLE_HITBOX_MARGIN,
            EntityKind::Bird => BIRD_HITBOX_MARGIN,
            EntityKind::Hazard => HAZARD_HITBOX_MARGIN,
        }
    }

    /// Obstacles hurt the player on contact
    pub fn is_obstacle(&self) -> bool {
        matches!(self, EntityKind::Trash | EntityKind::FallingBird)
    }

    pub fn is_fish(&self) -> bool {
        matches!(self, EntityKind::Fish(_))
    }
}

/// A live entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Center position
    pub pos: Vec2,
    /// x = horizontal speed, y = fall speed (px/s)
    pub vel: Vec2,
    pub spinning: bool,
    /// Current rotation in radians (only advances while spinning)
    pub rotation: f32,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel,
            spinning: false,
            rotation: 0.0,
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

new_key_type! {
    /// Stable handle to a registry slot; a stale id never aliases a reused slot
    pub struct EntityId;
}

/// Owner of every entity in a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    slots: SlotMap<EntityId, Entity>,
    /// Ids queued for removal at end of frame
    doomed: Vec<EntityId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.slots.insert(entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id)
    }

    /// Live and not already queued for removal
    pub fn is_active(&self, id: EntityId) -> bool {
        self.slots.contains_key(id) && !self.doomed.contains(&id)
    }

    /// Queue an entity for removal. Returns false if it was already gone or queued,
    /// which lets callers resolve each entity at most once per frame.
    pub fn despawn_later(&mut self, id: EntityId) -> bool {
        if !self.is_active(id) {
            return false;
        }
        self.doomed.push(id);
        true
    }

    /// Apply queued removals
    pub fn flush(&mut self) {
        for id in std::mem::take(&mut self.doomed) {
            self.slots.remove(id);
        }
    }

    /// Remove every entity immediately, including pending removals
    pub fn clear(&mut self) {
        self.doomed.clear();
        self.slots.clear();
    }

    /// Remove every entity in a category immediately
    pub fn clear_category(&mut self, category: Category) {
        self.slots.retain(|_, e| e.category() != category);
        let slots = &self.slots;
        self.doomed.retain(|id| slots.contains_key(*id));
    }

    /// Number of live entities (including ones queued for removal)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.slots.values().filter(|e| e.category() == category).count()
    }

    /// Iterate live entities in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.slots.iter_mut()
    }

    /// Snapshot of ids in one category, for passes that mutate the registry
    pub fn ids(&self, category: Category) -> Vec<EntityId> {
        self.slots
            .iter()
            .filter(|(_, e)| e.category() == category)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fish_at(x: f32) -> Entity {
        Entity::new(
            EntityKind::Fish(FishKind::Blue),
            Vec2::new(x, 0.0),
            Vec2::new(0.0, 100.0),
        )
    }

    #[test]
    fn test_removal_is_deferred() {
        let mut registry = Registry::new();
        let a = registry.spawn(fish_at(10.0));
        let b = registry.spawn(fish_at(20.0));

        assert!(registry.despawn_later(a));
        // Still present until flushed, but no longer active
        assert!(registry.get(a).is_some());
        assert!(!registry.is_active(a));
        // Second request for the same entity is rejected
        assert!(!registry.despawn_later(a));

        registry.flush();
        assert!(registry.get(a).is_none());
        assert!(registry.get(b).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_stale_id_does_not_alias_reused_slot() {
        let mut registry = Registry::new();
        let old = registry.spawn(fish_at(10.0));
        registry.despawn_later(old);
        registry.flush();

        let new = registry.spawn(fish_at(30.0));
        assert!(registry.get(old).is_none());
        assert_eq!(registry.get(new).map(|e| e.pos.x), Some(30.0));
    }

    #[test]
    fn test_clear_category() {
        let mut registry = Registry::new();
        registry.spawn(fish_at(10.0));
        let bird = registry.spawn(Entity::new(EntityKind::Bird, Vec2::ZERO, Vec2::X));
        registry.despawn_later(bird);
        registry.clear_category(Category::Flying);

        assert_eq!(registry.count(Category::Flying), 0);
        assert_eq!(registry.count(Category::Falling), 1);
        assert_eq!(registry.len(), 1);
        // The pending removal of the cleared bird must not underflow the count
        registry.flush();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut registry = Registry::new();
        for i in 0..5 {
            registry.spawn(fish_at(i as f32));
        }
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_bird_category_changes_when_falling() {
        let mut entity = Entity::new(EntityKind::Bird, Vec2::ZERO, Vec2::X);
        assert_eq!(entity.category(), Category::Flying);
        entity.kind = EntityKind::FallingBird;
        assert_eq!(entity.category(), Category::Falling);
        assert!(entity.kind.is_obstacle());
    }
}
