//! Game context and frame loop
//!
//! [`Game`] owns every resource the running game needs (config, media, the
//! time label) plus the simulation in [`GameState`]. Each frame drains
//! input, updates and draws; [`Game::run`] repeats that once per vsync
//! until a quit signal arrives.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::config::{GameConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::enemy::EnemyGroup;
use crate::input::{InputEvent, InputPoller};
use crate::player::Player;
use crate::texture::TextureResource;
use crate::timer::Timer;

/// Text shown in the time label
pub fn time_label_text(elapsed_ms: u64) -> String {
    format!("Time: {}", elapsed_ms / 1000)
}

/// Left edge of the time label: three quarters of the way across the free space
pub fn time_label_x(screen_width: i32, label_width: i32) -> i32 {
    3 * (screen_width - label_width) / 4
}

/// Everything the simulation mutates; no GPU resources
pub struct GameState {
    pub player: Player,
    pub enemies: EnemyGroup,
    pub timer: Timer,
    quit: bool,
}

impl GameState {
    pub fn new(player: Player, enemies: EnemyGroup) -> Self {
        Self {
            player,
            enemies,
            timer: Timer::start(),
            quit: false,
        }
    }

    /// Route one input event. Any key or a window close ends the game.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if event.is_quit_signal() {
            if let InputEvent::KeyDown(key) = event {
                log::info!("Quit on key {:?}", key);
            } else {
                log::info!("Quit requested");
            }
            self.quit = true;
        }
        self.player.handle_input(event);
    }

    /// Per-frame simulation step
    pub fn update(&mut self) {
        self.enemies.advance();
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

/// Application context: owns config, media and state for the whole run
pub struct Game {
    config: GameConfig,
    assets: Assets,
    time_label: TextureResource,
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig, assets: Assets) -> Self {
        let sprite = (assets.player.width() as i32, assets.player.height() as i32);
        let player = Player::new((SCREEN_WIDTH, SCREEN_HEIGHT), sprite);
        let enemies = EnemyGroup::new(&config);
        log::info!(
            "First enemy row: {} enemies, spin {}",
            enemies.count(),
            enemies.direction()
        );

        Self {
            config,
            assets,
            time_label: TextureResource::new(),
            state: GameState::new(player, enemies),
        }
    }

    /// Run frames until a quit signal, one per vsync
    pub async fn run(&mut self) {
        let mut input = InputPoller::new();
        log::info!("Entering main loop");

        while !self.state.should_quit() {
            self.frame(&mut input);
            next_frame().await;
        }
    }

    fn frame(&mut self, input: &mut InputPoller) {
        let events = input.poll();
        if !events.is_empty() {
            show_mouse(false);
        }
        for event in &events {
            self.state.handle_event(event);
        }

        self.refresh_time_label();
        self.state.update();

        let [r, g, b] = self.config.background;
        clear_background(Color::from_rgba(r, g, b, 255));
        self.draw();
    }

    /// Re-render the label text. A failure skips the label for this frame only.
    fn refresh_time_label(&mut self) {
        let text = time_label_text(self.state.timer.elapsed_ms());
        let [r, g, b] = self.config.text_color;
        if let Err(e) = self.time_label.load_from_rendered_text(
            &text,
            &self.assets.font,
            self.config.font_size,
            Color::from_rgba(r, g, b, 255),
        ) {
            log::warn!("Unable to render time texture: {}", e);
        }
    }

    fn draw(&mut self) {
        let label_x = time_label_x(SCREEN_WIDTH, self.time_label.width() as i32);
        self.time_label.render(label_x, 0);

        self.state.player.render(&self.assets.player);
        self.state.enemies.render(&self.assets.enemy);
    }
}
