//! Game settings and preferences
//!
//! Stored as JSON next to the binary. Nothing here changes the rules of the
//! game; it only toggles effects, sound and the run seed.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Debris particles when the ship or an asteroid is destroyed
    pub particles: bool,

    // === HUD ===
    /// Report frames per second on exit
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Fixed RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            show_fps: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
        }
    }
}

/// Failure reading or writing a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings I/O error: {}", e),
            SettingsError::Json(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "polyroids.json";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from `path`
    pub fn try_load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the default file in the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
