//! Simulation settings
//!
//! Loaded from a JSON file next to the binary; every field is optional and
//! falls back to the built-in court and tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::{Clock, CourtGeometry, KeyBindings, SimState};
use crate::tuning::Tuning;

/// Power percentage above which the meter is highlighted
pub const DEFAULT_HOT_POWER_PERCENT: u8 = 80;

/// Settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Court dimensions and hoop placement
    pub court: CourtGeometry,
    /// Physics and control balance
    pub tuning: Tuning,
    /// Host key name -> logical key
    pub keys: KeyBindings,

    // === Loop ===
    /// Run physics on a fixed timestep instead of the raw frame delta
    pub fixed_timestep: bool,

    // === HUD ===
    /// Meter turns "hot" above this percentage
    pub hot_power_percent: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court: CourtGeometry::default(),
            tuning: Tuning::default(),
            keys: KeyBindings::default(),

            // Frame-driven like the browser version
            fixed_timestep: false,

            hot_power_percent: DEFAULT_HOT_POWER_PERCENT,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path`
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Fresh simulation using these settings
    pub fn new_state(&self) -> SimState {
        SimState::new(self.court, self.tuning)
    }

    /// Frame pacing selected by these settings
    pub fn clock(&self) -> Clock {
        Clock::from_settings(self.fixed_timestep)
    }
}
