//! Sound cues
//!
//! The simulation only names the sound to play; the host decides how.
//! A missing or broken audio backend must never stall the game, so sinks
//! have no way to report failure.

use crate::sim::{FishKind, GameEvent};

/// Sound effect cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Regular fish caught
    FishCollect,
    /// Golden fish caught
    GoldenFish,
    HeartCollect,
    ShieldCollect,
    /// Player hit by trash, a falling bird or the shark
    TakeDamage,
    /// Bird struck a fish
    BirdHit,
    /// Shark warning started
    SharkAlert,
    GameOver,
}

impl Cue {
    /// Asset key understood by the host's audio loader
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::FishCollect => "fish_collect",
            Cue::GoldenFish => "golden_fish",
            Cue::HeartCollect => "heart_collect",
            Cue::ShieldCollect => "shield_collect",
            Cue::TakeDamage => "take_damage",
            Cue::BirdHit => "bird_hit",
            Cue::SharkAlert => "shark_alert",
            Cue::GameOver => "game_over",
        }
    }

    /// The cue (if any) that accompanies a simulation event
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::FishCollected {
                kind: FishKind::Golden,
                ..
            } => Some(Cue::GoldenFish),
            GameEvent::FishCollected { .. } => Some(Cue::FishCollect),
            GameEvent::HeartCollected { .. } => Some(Cue::HeartCollect),
            GameEvent::ShieldCollected => Some(Cue::ShieldCollect),
            GameEvent::DamageTaken { .. } => Some(Cue::TakeDamage),
            GameEvent::BirdHit => Some(Cue::BirdHit),
            GameEvent::HazardWarning { .. } => Some(Cue::SharkAlert),
            GameEvent::GameOver { .. } => Some(Cue::GameOver),
            GameEvent::HazardSpawned { .. }
            | GameEvent::FrenzyStarted { .. }
            | GameEvent::FrenzyEnded
            | GameEvent::RunFinished { .. } => None,
        }
    }
}

/// Something that can play cues
pub trait AudioSink {
    /// Play `cue` at `volume` (0.0 - 1.0)
    fn play(&mut self, cue: Cue, volume: f32);
}

/// Audio disabled or unavailable
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue, _volume: f32) {}
}

/// Records cues instead of playing them (headless runs, tests)
#[derive(Debug, Default, Clone)]
pub struct CueLog {
    pub played: Vec<Cue>,
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: Cue, _volume: f32) {
        self.played.push(cue);
    }
}
