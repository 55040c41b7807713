//! Static UI configuration
//!
//! Asset paths, window settings and the editable text (title, credits) are
//! read once at start-up from a JSON file. Every field has a default, so a
//! partial file only overrides what it names and a missing file is fine.
//!
//! Lookup order:
//! 1. a path given on the command line
//! 2. `<user config dir>/pixel_rpg_ui/ui.json`
//! 3. `assets/config/ui.json`
//! 4. built-in defaults

use crate::assets::AssetSlot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Project-local config file
pub const LOCAL_CONFIG_PATH: &str = "assets/config/ui.json";

/// Errors that can occur while reading the config file
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io(std::io::Error),

    /// File is not valid config JSON
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

/// File path for each art slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub bg_title: String,
    pub bg_settings: String,
    pub bg_credits: String,
    pub bg_char: String,
    pub bg_name: String,
    pub rock: String,
    pub char1: String,
    pub char2: String,
    pub char3: String,
}

impl AssetPaths {
    pub fn path(&self, slot: AssetSlot) -> &str {
        match slot {
            AssetSlot::BgTitle => &self.bg_title,
            AssetSlot::BgSettings => &self.bg_settings,
            AssetSlot::BgCredits => &self.bg_credits,
            AssetSlot::BgCharacter => &self.bg_char,
            AssetSlot::BgName => &self.bg_name,
            AssetSlot::Rock => &self.rock,
            AssetSlot::Character1 => &self.char1,
            AssetSlot::Character2 => &self.char2,
            AssetSlot::Character3 => &self.char3,
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        let at = |slot: AssetSlot| format!("assets/{}.png", slot.key());
        AssetPaths {
            bg_title: at(AssetSlot::BgTitle),
            bg_settings: at(AssetSlot::BgSettings),
            bg_credits: at(AssetSlot::BgCredits),
            bg_char: at(AssetSlot::BgCharacter),
            bg_name: at(AssetSlot::BgName),
            rock: at(AssetSlot::Rock),
            char1: at(AssetSlot::Character1),
            char2: at(AssetSlot::Character2),
            char3: at(AssetSlot::Character3),
        }
    }
}

/// Editable text shown on the title and credits screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub title: String,

    /// Game description, word-wrapped into the left credits panel
    pub credits_blurb: String,

    /// Name list for the right credits panel, one entry per line
    pub credits_roll: Vec<String>,

    pub credits_footer: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            title: "GAME".to_string(),
            credits_blurb: "(Game Name) is a pixelated RPG adventure where you and \
                your friends are transported into the world of Materials Science, \
                exploring concepts like stress and strain through interactive \
                challenges. Using the knowledge you gain, you'll overcome obstacles \
                such as crushing walls and collapsing paths, all while enjoying fun, \
                retro-style gameplay inspired by Pokemon Deluge RPG."
                .to_string(),
            credits_roll: [
                "PROGRAMMERS & RESEARCHER",
                "  Sumampong",
                "  Aguanta",
                "  Mahusay",
                "",
                "VOICE ACTORS",
                "  Dabon ..... Mean Girl",
                "  Bungcaras . Jock",
                "  Esolana ... Nerd",
                "  Rennier ... Class Clown",
                "  Gines ..... Seismologist",
                "",
                "GRAPHICS",
                "  All Members",
            ]
            .iter()
            .map(|line| line.to_string())
            .collect(),
            credits_footer: "SUBMITTED TO: SIR SEAN POLICARPIO".to_string(),
        }
    }
}

/// Top-level UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_title: String,

    /// Integer window scale; `None` picks one from the monitor size
    pub window_scale: Option<u32>,

    /// Frame pacing target
    pub target_fps: u32,

    pub assets: AssetPaths,
    pub content: ContentConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            window_title: "Pixel RPG UI".to_string(),
            window_scale: None,
            target_fps: 60,
            assets: AssetPaths::default(),
            content: ContentConfig::default(),
        }
    }
}

impl UiConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: UiConfig = serde_json::from_str(json)?;
        config.target_fps = config.target_fps.clamp(1, 240);
        Ok(config)
    }

    /// Frame budget for the target FPS
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

/// Per-user override location
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pixel_rpg_ui").join("ui.json"))
}

/// Find the first config file that exists, following the lookup order
pub fn locate(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    user_config_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_PATH)))
        .find(|path| path.exists())
}

/// Load the config, falling back to defaults when it is missing or broken
pub fn load_or_default(explicit: Option<&str>) -> UiConfig {
    match locate(explicit) {
        Some(path) => match UiConfig::load_from_file(&path) {
            Ok(config) => {
                println!("Config: {}", path.display());
                config
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not read config {}: {} (using defaults)",
                    path.display(),
                    e
                );
                UiConfig::default()
            }
        },
        None => {
            println!("Config: no config file found, using defaults");
            UiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.window_scale, None);
        assert_eq!(config.assets.path(AssetSlot::BgCharacter), "assets/bg_char.png");
        assert_eq!(config.assets.path(AssetSlot::Character3), "assets/char3.png");
        assert_eq!(config.content.title, "GAME");
        assert_eq!(config.content.credits_roll.len(), 14);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = UiConfig::from_json(
            r#"{ "window_scale": 4, "assets": { "rock": "art/pebble.png" } }"#,
        )
        .unwrap();

        assert_eq!(config.window_scale, Some(4));
        assert_eq!(config.assets.path(AssetSlot::Rock), "art/pebble.png");
        assert_eq!(config.assets.path(AssetSlot::BgTitle), "assets/bg_title.png");
        assert_eq!(config.content, ContentConfig::default());
    }

    #[test]
    fn test_fps_is_clamped() {
        let config = UiConfig::from_json(r#"{ "target_fps": 0 }"#).unwrap();
        assert_eq!(config.target_fps, 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = UiConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let message: String = err.into();
        assert!(message.starts_with("Parse error"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = UiConfig::load_from_file("does/not/exist/ui.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(locate(Some("custom.json")), Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn test_frame_duration() {
        let config = UiConfig::default();
        assert_eq!(config.frame_duration().as_micros(), 16_666);
    }
}
