//! Platform abstraction layer
//!
//! The simulation never talks to the browser directly. The scene is handed
//! implementations of these collaborators instead:
//! - `input`: keyboard and touch zones reduced to a left/right intent
//! - `audio`: symbolic sound cues
//! - `sdk`: host platform hooks (game-over reporting)

pub mod audio;
pub mod input;
pub mod sdk;

pub use audio::{AudioSink, Cue, CueLog, NullAudio};
pub use input::InputState;
pub use sdk::{NullSdk, PlatformSdk, RecordingSdk};
