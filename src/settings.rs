//! Host configuration.
//!
//! Loaded once at startup from a JSON file named by the `HORDE_SETTINGS`
//! environment variable. A missing or malformed file falls back to the
//! defaults with a logged warning, never an error.

use serde::{Deserialize, Serialize};

/// Host settings for a demo run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Base RNG seed; `None` draws a random one at startup.
    pub seed: Option<u64>,
    /// Demo sessions to play before exiting.
    pub sessions: u32,
    /// Tick cap per session (6000 ticks is five minutes at 50 ms).
    pub max_ticks: u64,

    // === Host behavior ===
    /// Pace ticks to wall time with the clock thread; off runs unpaced
    /// with a synthetic 50 ms pulse per tick.
    pub realtime: bool,
    /// Emit telemetry events as JSON lines on stdout instead of log lines.
    pub json_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            sessions: 3,
            max_ticks: 6000,
            realtime: false,
            json_events: false,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file.
    const ENV_KEY: &'static str = "HORDE_SETTINGS";

    /// Load settings from the file named by `HORDE_SETTINGS`.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_KEY) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {path}");
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read settings file {path}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.sessions, 3);
        assert_eq!(settings.max_ticks, 6000);
        assert!(!settings.realtime);
        assert!(!settings.json_events);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.sessions, 3);
        assert_eq!(settings.max_ticks, 6000);
    }

    #[test]
    fn test_full_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            sessions: 1,
            max_ticks: 100,
            realtime: true,
            json_events: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(7));
        assert_eq!(back.sessions, 1);
        assert!(back.realtime);
    }
}
