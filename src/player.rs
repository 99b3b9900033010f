//! Player sprite
//!
//! Sits directly under the mouse cursor, kept fully on screen.

use crate::input::InputEvent;
use crate::texture::TextureResource;

pub struct Player {
    x: i32,
    y: i32,
    /// Largest x/y that keeps the whole sprite on screen
    max_x: i32,
    max_y: i32,
}

impl Player {
    /// Player for a `screen` sized window and a `sprite` sized texture, at (0, 0)
    pub fn new(screen: (i32, i32), sprite: (i32, i32)) -> Self {
        Self {
            x: 0,
            y: 0,
            max_x: (screen.0 - sprite.0).max(0),
            max_y: (screen.1 - sprite.1).max(0),
        }
    }

    /// Follow mouse motion; every other event is ignored
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let InputEvent::MouseMotion { x, y } = *event {
            self.x = x.clamp(0, self.max_x);
            self.y = y.clamp(0, self.max_y);
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn render(&self, texture: &TextureResource) {
        texture.render(self.x, self.y);
    }
}
