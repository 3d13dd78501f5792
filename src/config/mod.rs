pub mod loader;

use serde::{Deserialize, Serialize};

const DEFAULT_SCREEN_FRACTION: f64 = 0.7;

// Runtime settings, loaded once at startup and passed by reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub screen_fraction: f64, // Share of the detected display used by the playfield
    pub cell_width_px: u16,   // Virtual pixels covered by one terminal column
    pub cell_height_px: u16,  // Virtual pixels covered by one terminal row
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_fraction: DEFAULT_SCREEN_FRACTION,
            cell_width_px: 8,
            cell_height_px: 16,
        }
    }
}

impl DisplayConfig {
    /// The configured fraction, or the default when it is outside (0, 1].
    #[must_use]
    pub fn effective_fraction(&self) -> f64 {
        if self.screen_fraction > 0.0 && self.screen_fraction <= 1.0 {
            self.screen_fraction
        } else {
            DEFAULT_SCREEN_FRACTION
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    // When the terminal does not report key releases: how long a fresh press
    // stays held, covering the keyboard's repeat delay
    pub initial_hold_ms: u64,
    // ...and how long each auto-repeat extends it
    pub key_hold_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial_hold_ms: 600,
            key_hold_ms: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: String,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: "dodge_blocks.log".to_string(),
            level: "info".to_string(),
        }
    }
}
