use crate::paths::PATH_DECK;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

fn default_zoom_factor() -> f32 {
    1.1
}

/// Window preferences persisted across runs. Navigation state is
/// deliberately not part of this; every launch starts on the home screen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeckConfig {
    #[serde(default)]
    pub fullscreen: bool,
    /// UI scale applied to the egui context at startup
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            fullscreen: false,
            zoom_factor: default_zoom_factor(),
        }
    }
}

pub fn load_cfg() -> DeckConfig {
    let path = PATH_DECK.join("settings.json");

    if let Ok(file) = File::open(&path) {
        match serde_json::from_reader::<_, DeckConfig>(BufReader::new(file)) {
            Ok(config) => return config,
            Err(e) => eprintln!(
                "[widgetdeck] Unreadable {}, using defaults: {}",
                path.display(),
                e
            ),
        }
    }

    DeckConfig::default()
}

pub fn save_cfg(config: &DeckConfig) -> Result<(), Box<dyn Error>> {
    let path = PATH_DECK.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = DeckConfig::default();
        assert!(!config.fullscreen);
        assert!(config.zoom_factor > 0.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DeckConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn roundtrips_through_json() {
        let config = DeckConfig {
            fullscreen: true,
            zoom_factor: 1.5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
