//! Media loading
//!
//! The font and both sprite images are loaded once at startup. Each failure is
//! logged on its own so a broken install reports everything that is missing,
//! not just the first file.

use macroquad::prelude::*;

use crate::config::GameConfig;
use crate::texture::TextureResource;

/// Error type for startup media loading
#[derive(Debug)]
pub enum LoadError {
    /// How many of the assets failed (details were already logged)
    Media { failures: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Media { failures } => write!(f, "{} asset(s) failed to load", failures),
        }
    }
}

impl std::error::Error for LoadError {}

/// Everything read from the resource directory
pub struct Assets {
    pub font: Font,
    pub player: TextureResource,
    pub enemy: TextureResource,
}

impl Assets {
    pub async fn load(config: &GameConfig) -> Result<Self, LoadError> {
        let mut failures = 0;

        let font_path = config.resource_path(&config.font_file);
        let font = match load_ttf_font(&font_path.to_string_lossy()).await {
            Ok(font) => {
                log::info!("Loaded font {}", font_path.display());
                Some(font)
            }
            Err(e) => {
                log::error!("Failed to load font {}: {}", font_path.display(), e);
                failures += 1;
                None
            }
        };

        let mut player = TextureResource::new();
        if !load_sprite(&mut player, config, &config.player_image, "player") {
            failures += 1;
        }
        let [r, g, b] = config.player_tint;
        player.set_color(r, g, b);

        let mut enemy = TextureResource::new();
        if !load_sprite(&mut enemy, config, &config.enemy_image, "enemy") {
            failures += 1;
        }
        let [r, g, b] = config.enemy_tint;
        enemy.set_color(r, g, b);

        match font {
            Some(font) if failures == 0 => Ok(Self { font, player, enemy }),
            _ => Err(LoadError::Media { failures }),
        }
    }
}

fn load_sprite(texture: &mut TextureResource, config: &GameConfig, file: &str, what: &str) -> bool {
    let path = config.resource_path(file);
    match texture.load_from_file(&path, config.color_key) {
        Ok(()) => {
            log::info!(
                "Loaded {} texture {} ({}x{})",
                what,
                path.display(),
                texture.width(),
                texture.height()
            );
            true
        }
        Err(e) => {
            log::error!("Failed to load {} texture {}: {}", what, path.display(), e);
            false
        }
    }
}
