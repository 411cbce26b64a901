//! Visual settings and preferences
//!
//! Persisted separately from the score entries in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Visual preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Translucent halo behind the player
    pub glow: bool,
    /// Lighten shapes toward white near the top of the screen
    pub gradient: bool,
    /// Slowly shifting background color
    pub background_pulse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glow: true,
            gradient: true,
            background_pulse: true,
        }
    }
}

impl Settings {
    /// Plain look: flat colors, static background
    pub fn classic() -> Self {
        Self {
            glow: false,
            gradient: false,
            background_pulse: false,
        }
    }

    /// The other look: classic becomes the full look, anything else becomes classic
    pub fn toggled(&self) -> Self {
        if *self == Self::classic() {
            Self::default()
        } else {
            Self::classic()
        }
    }

    /// Serialized form written to storage
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| GameError::Storage(format!("failed to encode settings: {e}")))
    }

    /// Parse stored settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GameError::Storage(format!("corrupt settings: {e}")))
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rock_dodge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("{}; ignoring", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        else {
            log::warn!("LocalStorage unavailable; settings not saved");
            return;
        };

        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };

        match storage.set_item(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {:?}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
