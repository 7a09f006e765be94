//! Creature AI: wandering and predator chase

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, random_heading};
use super::particles::Color;
use super::world::WorldBounds;
use crate::consts::{CHASE_RADIUS, WANDER_CHANCE};

/// Which population a creature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Prey,
    Predator,
}

#[derive(Debug, Clone)]
pub struct Creature {
    pub id: u32,
    pub role: Role,
    pub body: Body,
    /// Render label (e.g. "plankton")
    pub species: &'static str,
    /// Fallback render color
    pub color: Color,
}

impl Creature {
    pub fn is_predator(&self) -> bool {
        self.role == Role::Predator
    }

    pub fn size(&self) -> u32 {
        self.body.size
    }

    /// Pick this tick's heading.
    ///
    /// Predators given a target aim straight at it while it is within
    /// `CHASE_RADIUS`; everything else wanders.
    pub fn steer<R: Rng + ?Sized>(&mut self, target: Option<Vec2>, rng: &mut R) {
        if self.is_predator() {
            if let Some(target) = target {
                let to_target = target - self.body.pos;
                if to_target.length() < CHASE_RADIUS {
                    // Sitting exactly on the target keeps the old heading
                    if let Some(dir) = to_target.try_normalize() {
                        self.body.dir = dir;
                    }
                    return;
                }
            }
        }
        self.wander(rng);
    }

    /// Memoryless random walk: occasionally resample the heading
    pub fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if rng.random_bool(WANDER_CHANCE) {
            if let Some(dir) = random_heading(rng) {
                self.body.dir = dir;
            }
        }
    }

    /// Steer, move once, then wrap around the world edges
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        target: Option<Vec2>,
        bounds: &WorldBounds,
        rng: &mut R,
    ) {
        self.steer(target, rng);

        let old_x = self.body.pos.x;
        self.body.step();
        self.body.face_toward(self.body.pos.x - old_x);
        self.body.pos = bounds.wrap(self.body.pos);
    }
}
