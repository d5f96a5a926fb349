//! Host settings and preferences
//!
//! Persisted in LocalStorage on the web; read from a JSON file on native.
//! Every field has a default so partial documents are accepted.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Environment variable naming a settings JSON file (native only)
pub const SETTINGS_ENV_VAR: &str = "DINO_RUN_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    /// Fixed RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,

    // === HUD ===
    /// Show the "State: Running/Jumping" line
    pub show_player_state: bool,

    // === Frame clock ===
    /// Longest frame delta passed to the simulation (ms)
    pub max_frame_ms: f32,

    // === Demo (native) ===
    /// Let the autopilot play
    pub autopilot: bool,
    /// Frames to simulate in the headless demo
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 400.0,
            seed: None,
            show_player_state: true,
            max_frame_ms: 100.0,
            autopilot: true,
            demo_frames: 3600,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: &str) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Settings from a stored document, falling back to defaults when
    /// nothing is stored or the document does not parse
    pub fn from_stored(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded stored settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        Self::from_stored(stored.as_deref())
    }

    /// Write settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        match self.to_json() {
            Ok(json) => {
                if storage.set_item(STORAGE_KEY, &json).is_err() {
                    log::warn!("Could not write settings to LocalStorage");
                } else {
                    log::debug!("Settings saved");
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }

    /// Load settings from the file named by `DINO_RUN_SETTINGS`, falling
    /// back to defaults when unset or unreadable
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}

/// LocalStorage key holding the settings document
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "dino_run_settings";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
