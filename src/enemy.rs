//! Enemy rows
//!
//! A single horizontal row of spinning enemies scrolls down the screen. When
//! it falls past the bottom edge it jumps back to the top with a freshly
//! rolled enemy count and spin direction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, SCREEN_HEIGHT};
use crate::texture::{RenderParams, TextureResource};

/// Where one enemy of the row is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemySprite {
    pub x: i32,
    pub y: i32,
    /// Rotation in degrees, always in 0..360
    pub angle: i32,
}

pub struct EnemyGroup {
    row_y: i32,
    /// Rotation carried from sprite to sprite and frame to frame
    degrees: i32,
    /// -1, 0 or +1 degrees per sprite drawn
    direction: i32,
    count: u32,

    screen_height: i32,
    stride: i32,
    step: i32,
    min_count: u32,
    max_count: u32,

    rng: StdRng,
}

impl EnemyGroup {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build with a caller-supplied generator (seeded in tests)
    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let mut group = Self {
            row_y: 0,
            degrees: 0,
            direction: 0,
            count: 0,
            screen_height: SCREEN_HEIGHT,
            stride: config.enemy_stride,
            step: config.scroll_step,
            min_count: config.min_enemies,
            max_count: config.max_enemies,
            rng,
        };
        group.reroll();
        group
    }

    fn reroll(&mut self) {
        self.direction = self.rng.gen_range(-1..=1);
        self.count = self.rng.gen_range(self.min_count..=self.max_count);
    }

    /// Scroll the row down one step, wrapping to the top past the bottom edge
    pub fn advance(&mut self) {
        self.row_y = self.row_y.saturating_add(self.step);
        if self.row_y > self.screen_height {
            self.row_y = 0;
            self.reroll();
            log::trace!("Enemy row wrapped: {} enemies, spin {}", self.count, self.direction);
        }
    }

    /// Positions and angles for this frame, left to right.
    ///
    /// Rotation accumulates per sprite, so each frame turns the row by
    /// `count` degrees and neighbouring sprites sit one degree apart.
    pub fn layout(&mut self) -> Vec<EnemySprite> {
        let mut sprites = Vec::with_capacity(self.count as usize);
        let mut x = 0;
        for _ in 0..self.count {
            self.degrees = (self.degrees + self.direction).rem_euclid(360);
            sprites.push(EnemySprite {
                x,
                y: self.row_y,
                angle: self.degrees,
            });
            x += self.stride;
        }
        sprites
    }

    pub fn render(&mut self, texture: &TextureResource) {
        for sprite in self.layout() {
            texture.render_ex(
                sprite.x,
                sprite.y,
                &RenderParams {
                    angle: sprite.angle as f32,
                    ..Default::default()
                },
            );
        }
    }

    #[cfg(test)]
    pub fn row_y(&self) -> i32 {
        self.row_y
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(seed: u64) -> EnemyGroup {
        EnemyGroup::with_rng(&GameConfig::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_initial_state() {
        let g = group(1);
        assert_eq!(g.row_y(), 0);
        assert!((4..=8).contains(&g.count()));
        assert!((-1..=1).contains(&g.direction()));
    }

    #[test]
    fn test_scrolls_one_pixel_per_step() {
        let mut g = group(2);
        let count = g.count();
        for expected in 1..=480 {
            g.advance();
            assert_eq!(g.row_y(), expected);
        }
        // Still on screen, so nothing re-rolled
        assert_eq!(g.count(), count);
    }

    #[test]
    fn test_wraps_past_bottom_edge() {
        let mut g = group(3);
        g.row_y = 480;
        g.advance();
        assert_eq!(g.row_y(), 0);

        g.row_y = 481;
        g.advance();
        assert_eq!(g.row_y(), 0);
    }

    #[test]
    fn test_huge_step_wraps_instead_of_overflowing() {
        let mut g = group(10);
        g.step = i32::MAX;
        g.row_y = 479;
        g.advance();
        assert_eq!(g.row_y(), 0);
    }

    #[test]
    fn test_rerolls_stay_in_range() {
        let mut g = group(4);
        let mut counts = std::collections::HashSet::new();
        let mut directions = std::collections::HashSet::new();
        for _ in 0..200 {
            g.row_y = 480;
            g.advance();
            assert_eq!(g.row_y(), 0);
            assert!((4..=8).contains(&g.count()));
            assert!((-1..=1).contains(&g.direction()));
            counts.insert(g.count());
            directions.insert(g.direction());
        }
        assert_eq!(counts.len(), 5);
        assert_eq!(directions.len(), 3);
    }

    #[test]
    fn test_row_y_never_leaves_screen() {
        let mut g = group(5);
        for _ in 0..5000 {
            g.advance();
            assert!((0..=480).contains(&g.row_y()));
        }
    }

    #[test]
    fn test_layout_strides_left_to_right() {
        let mut g = group(6);
        g.count = 5;
        g.row_y = 42;
        let sprites = g.layout();
        let xs: Vec<i32> = sprites.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0, 50, 100, 150, 200]);
        assert!(sprites.iter().all(|s| s.y == 42));
    }

    #[test]
    fn test_rotation_accumulates_across_sprites_and_frames() {
        let mut g = group(7);
        g.count = 4;
        g.direction = 1;
        g.degrees = 0;

        let angles: Vec<i32> = g.layout().iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![1, 2, 3, 4]);

        let angles: Vec<i32> = g.layout().iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_counter_clockwise_spin_wraps_angle() {
        let mut g = group(8);
        g.count = 3;
        g.direction = -1;
        g.degrees = 1;

        let angles: Vec<i32> = g.layout().iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![0, 359, 358]);
    }

    #[test]
    fn test_zero_direction_does_not_spin() {
        let mut g = group(9);
        g.direction = 0;
        g.degrees = 90;
        assert!(g.layout().iter().all(|s| s.angle == 90));
    }
}
