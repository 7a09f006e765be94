//! Particle feedback: eat bursts, level-up bursts and ambient bubbles
//!
//! Particles are visual only and never affect gameplay, but they draw from the
//! simulation RNG so they stay deterministic along with everything else.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::world::WorldBounds;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Translucent white
    pub const BUBBLE: Color = Color::rgba(255, 255, 255, 128);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);
}

/// A single fading particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub color: Color,
    pub size: u32,
    /// Upward drift per tick
    pub speed: f32,
    pub alpha: u8,
    /// Alpha lost per tick
    pub fade_speed: u8,
}

impl Particle {
    /// Drift up and fade. Returns false once fully transparent.
    pub fn update(&mut self) -> bool {
        self.pos.y -= self.speed;
        self.alpha = self.alpha.saturating_sub(self.fade_speed);
        self.alpha > 0
    }
}

/// Live particle set with a soft cap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    /// Spawns beyond this many live particles are dropped (0 disables particles)
    pub max_particles: usize,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawn `count` particles at `pos`, each with its own size, speed and fade rate
    pub fn spawn<R: Rng + ?Sized>(&mut self, pos: Vec2, color: Color, count: usize, rng: &mut R) {
        for _ in 0..count {
            if self.particles.len() >= self.max_particles {
                break;
            }
            self.particles.push(Particle {
                pos,
                color,
                size: rng.random_range(2..=6),
                speed: rng.random_range(1.0..=3.0),
                alpha: 255,
                fade_speed: rng.random_range(5..=10),
            });
        }
    }

    /// Age every particle by one tick and drop the faded ones
    pub fn tick(&mut self) {
        self.particles.retain_mut(Particle::update);
    }

    /// With probability `chance`, release one bubble somewhere along the bottom edge
    pub fn maybe_spawn_bubble<R: Rng + ?Sized>(
        &mut self,
        bounds: &WorldBounds,
        chance: f64,
        rng: &mut R,
    ) {
        if rng.random_bool(chance) {
            let x = rng.random_range(0.0..=bounds.width);
            self.spawn(Vec2::new(x, bounds.height), Color::BUBBLE, 1, rng);
        }
    }
}
