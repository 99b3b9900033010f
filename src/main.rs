//! Bullet Hell: steer a ship with the mouse while rows of spinning enemies
//! scroll down the screen.
//!
//! Resources (font, sprites, optional config.ron) are read from `Resources/`
//! relative to the working directory. Any key or closing the window quits.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod enemy;
mod game;
mod input;
mod player;
mod texture;
mod timer;

use assets::Assets;
use config::{GameConfig, CONFIG_PATH, SCREEN_HEIGHT, SCREEN_WIDTH};
use game::Game;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    // Runs before logging is up; main() reloads the config and reports problems
    let config = GameConfig::load(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: config.window_title,
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        high_dpi: false,
        platform: Platform {
            // Present on vsync; the game loop is paced by it
            swap_interval: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("=== Bullet Hell v{} ===", VERSION);

    let config = GameConfig::load_or_default(CONFIG_PATH);

    match Assets::load(&config).await {
        Ok(assets) => {
            let mut game = Game::new(config, assets);
            game.run().await;
        }
        Err(e) => log::error!("Failed to load media: {}", e),
    }

    log::info!("Shutting down");
}
