//! Player preferences
//!
//! Persisted separately from anything run-related, in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::storage;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Platform or player mute
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (steady hazard warning instead of flashing)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Volume to hand to the audio sink; 0 means skip the cue entirely
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Whether the hazard warning indicator should blink
    pub fn flashing_warnings(&self) -> bool {
        !self.reduced_motion
    }

    const STORAGE_KEY: &'static str = "fish_frenzy_settings";

    /// Stored preferences, or defaults when there are none
    pub fn load() -> Self {
        storage::load(Self::STORAGE_KEY).unwrap_or_else(|| {
            log::info!("Using default settings");
            Self::default()
        })
    }

    pub fn save(&self) {
        if storage::save(Self::STORAGE_KEY, self) {
            log::info!("Settings saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "reduced_motion": true }"#).unwrap();
        assert!(settings.reduced_motion);
        assert!(!settings.flashing_warnings());
        assert_eq!(settings.sfx_volume, 1.0);
    }
}
