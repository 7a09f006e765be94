//! Movement primitive shared by the player and creatures
//!
//! A `Body` is pure physics data: top-left position, heading, speed and
//! square size. Rendering builds its own projection from it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned square hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: f32,
}

impl Rect {
    pub fn new(min: Vec2, size: f32) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + Vec2::splat(self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.min + Vec2::splat(self.size / 2.0)
    }

    /// Strict overlap; rectangles that only share an edge do not touch
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner in world coordinates
    pub pos: Vec2,
    /// Unit heading, or zero when idle
    pub dir: Vec2,
    pub speed: f32,
    pub size: u32,
    /// Render-only orientation
    pub facing_right: bool,
}

impl Body {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32, size: u32) -> Self {
        Self {
            pos,
            dir,
            speed,
            size,
            facing_right: dir.x >= 0.0,
        }
    }

    /// Advance one tick along the current heading
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.dir * self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size as f32)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Update facing from horizontal motion; no horizontal motion keeps the old facing
    pub fn face_toward(&mut self, dx: f32) {
        if dx > 0.0 {
            self.facing_right = true;
        } else if dx < 0.0 {
            self.facing_right = false;
        }
    }
}

/// Uniform candidate in [-1, 1] per axis, normalized.
///
/// Returns `None` for the (measure-zero) zero-length draw so callers can keep
/// their previous heading.
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec2> {
    Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0)).try_normalize()
}

/// Initial heading for a freshly spawned creature
pub fn spawn_heading<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    (0..8).find_map(|_| random_heading(rng)).unwrap_or(Vec2::X)
}
