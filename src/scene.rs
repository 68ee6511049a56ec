//! Gameplay scene
//!
//! Owns one run of the simulation plus the collaborators it talks to.
//! The host calls [`Scene::tick`] once per rendered frame; events raised by
//! the simulation are turned into sound cues and platform calls here, so the
//! simulation itself stays free of side effects.

use crate::highscores::{HighScoreEntry, HighScores};
use crate::platform::{AudioSink, Cue, NullAudio, NullSdk, PlatformSdk};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::{HudSnapshot, SpriteView, sprites};

/// A playable scene with injected audio and platform collaborators
pub struct Scene<A: AudioSink = NullAudio, S: PlatformSdk = NullSdk> {
    state: GameState,
    tuning: Tuning,
    settings: Settings,
    high_scores: HighScores,
    audio: A,
    sdk: S,
    /// Rank of the last finished run on the leaderboard
    last_rank: Option<usize>,
}

impl Scene {
    /// A scene with no audio and no platform attached
    pub fn headless(seed: u64) -> Self {
        Self::new(seed, Tuning::default(), NullAudio, NullSdk)
    }
}

impl<A: AudioSink, S: PlatformSdk> Scene<A, S> {
    pub fn new(seed: u64, mut tuning: Tuning, audio: A, sdk: S) -> Self {
        log::info!("New run, seed {}", seed);
        tuning.validate();
        Self {
            state: GameState::with_tuning(seed, tuning.clone()),
            tuning,
            settings: Settings::default(),
            high_scores: HighScores::new(),
            audio,
            sdk,
            last_rank: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_high_scores(mut self, high_scores: HighScores) -> Self {
        self.high_scores = high_scores;
        self
    }

    /// Advance one frame and dispatch whatever happened
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.state, input, dt);
        for event in self.state.drain_events() {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        if let Some(cue) = Cue::for_event(&event) {
            let volume = self.settings.effective_volume();
            if volume > 0.0 {
                self.audio.play(cue, volume);
            }
        }
        if let GameEvent::RunFinished { score } = event {
            self.sdk.report_game_over(score);
            self.last_rank = self.high_scores.add(HighScoreEntry::from_run(&self.state));
            if let Some(rank) = self.last_rank {
                log::info!("New high score #{}: {}", rank, score);
                self.high_scores.save();
            }
        }
    }

    /// Start a fresh run (the platform's "play again" signal)
    pub fn play_again(&mut self) {
        let seed = self
            .state
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        log::info!("Play again, seed {}", seed);
        self.state = GameState::with_tuning(seed, self.tuning.clone());
        self.last_rank = None;
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::capture(&self.state, &self.settings)
    }

    pub fn sprites(&self) -> Vec<SpriteView> {
        sprites(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for debugging tools and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == GamePhase::Finished
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }
}
