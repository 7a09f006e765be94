//! World bounds shared by every component that needs the playfield size

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// Playfield size. Creatures wrap around it, the player is clamped inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Toroidal wrap: below 0 re-enters at the far edge, past the far edge re-enters at 0
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// Clamp a box of `size` so it stays fully inside the world.
    ///
    /// A box larger than the world pins to 0 rather than panicking.
    pub fn clamp_box(&self, pos: Vec2, size: f32) -> Vec2 {
        Vec2::new(
            pos.x.min(self.width - size).max(0.0),
            pos.y.min(self.height - size).max(0.0),
        )
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

#[inline]
fn wrap_axis(v: f32, edge: f32) -> f32 {
    if v < 0.0 {
        edge
    } else if v > edge {
        0.0
    } else {
        v
    }
}
