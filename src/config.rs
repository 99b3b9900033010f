//! Game configuration
//!
//! Stored as RON next to the game's resources. Every field has a default, so
//! the file is optional and may list only the values it wants to override.
//! The window size is fixed and not part of the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the optional config file lives, relative to the working directory
pub const CONFIG_PATH: &str = "Resources/config.ron";

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunables for the window, assets and enemy rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,

    /// Directory all asset file names are resolved against
    pub resource_dir: PathBuf,
    pub font_file: String,
    pub font_size: u16,
    pub player_image: String,
    pub enemy_image: String,

    /// Pixels of this RGB color are made transparent when images load
    pub color_key: [u8; 3],
    pub background: [u8; 3],
    pub text_color: [u8; 3],
    /// Color modulation for the sprites; white leaves them unchanged
    pub player_tint: [u8; 3],
    pub enemy_tint: [u8; 3],

    /// Horizontal distance between enemies in a row
    pub enemy_stride: i32,
    /// Vertical pixels the enemy row moves per frame
    pub scroll_step: i32,
    pub min_enemies: u32,
    pub max_enemies: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Bullet Hell".to_string(),
            resource_dir: PathBuf::from("Resources"),
            font_file: "ostrich-regular.ttf".to_string(),
            font_size: 28,
            player_image: "player.png".to_string(),
            enemy_image: "enemy.png".to_string(),
            color_key: [0x00, 0xFF, 0xFF],
            background: [0xFF, 0xFF, 0xFF],
            text_color: [0x00, 0x00, 0x00],
            player_tint: [0xFF, 0xFF, 0xFF],
            enemy_tint: [0xFF, 0xFF, 0xFF],
            enemy_stride: 50,
            scroll_step: 1,
            min_enemies: 4,
            max_enemies: 8,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Load the config at `path`, falling back to defaults.
    ///
    /// A missing file is normal and only logged at debug level. A file that
    /// exists but can't be used is reported, then ignored.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_size == 0 {
            return Err(ConfigError::Validation("font_size must be positive".to_string()));
        }
        if self.scroll_step <= 0 || self.scroll_step > SCREEN_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "scroll_step must be in 1..={}, got {}",
                SCREEN_HEIGHT, self.scroll_step
            )));
        }
        if self.min_enemies > self.max_enemies {
            return Err(ConfigError::Validation(format!(
                "min_enemies ({}) exceeds max_enemies ({})",
                self.min_enemies, self.max_enemies
            )));
        }
        Ok(())
    }

    /// Resolve an asset file name against the resource directory
    pub fn resource_path(&self, name: &str) -> PathBuf {
        self.resource_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.scroll_step, 1);
        assert_eq!(config.player_tint, [255, 255, 255]);
        assert_eq!(config.color_key, [0, 255, 255]);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.resource_path("player.png"),
            PathBuf::from("Resources").join("player.png")
        );
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = GameConfig::from_ron("(font_size: 40, enemy_stride: 64)").unwrap();
        assert_eq!(config.font_size, 40);
        assert_eq!(config.enemy_stride, 64);
        assert_eq!(config.min_enemies, 4);
        assert_eq!(config.window_title, "Bullet Hell");
    }

    #[test]
    fn test_validation_rejects_bad_ranges() {
        let err = GameConfig::from_ron("(min_enemies: 9, max_enemies: 3)").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = GameConfig::from_ron("(font_size: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_scroll_step_bounded_by_screen() {
        let err = GameConfig::from_ron("(scroll_step: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = GameConfig::from_ron("(scroll_step: 2147483647)").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let config = GameConfig::from_ron("(scroll_step: 480)").unwrap();
        assert_eq!(config.scroll_step, SCREEN_HEIGHT);
    }

    #[test]
    fn test_window_size_is_not_configurable() {
        // Stale keys from older files are ignored, not applied
        let config = GameConfig::from_ron("(screen_width: 1920, screen_height: 1080)").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron("(font_size: \"big\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(window_title: \"Test\", max_enemies: 6)").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.window_title, "Test");
        assert_eq!(config.max_enemies, 6);
    }

    #[test]
    fn test_load_or_default_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ron");
        assert_eq!(GameConfig::load_or_default(&missing), GameConfig::default());

        let broken = dir.path().join("broken.ron");
        fs::write(&broken, "(((").unwrap();
        assert_eq!(GameConfig::load_or_default(&broken), GameConfig::default());
    }
}
