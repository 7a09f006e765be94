//! Population manager: per-level spawn rosters and creature movement

use glam::Vec2;
use rand::Rng;

use super::creature::{Creature, Role};
use super::entity::{Body, spawn_heading};
use super::particles::Color;
use super::world::WorldBounds;
use crate::consts::MAX_LEVEL;

/// One row of a level roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnGroup {
    pub count: usize,
    pub size: u32,
    pub speed: f32,
    pub color: Color,
    pub role: Role,
    pub species: &'static str,
}

const fn group(
    count: usize,
    size: u32,
    speed: f32,
    color: Color,
    role: Role,
    species: &'static str,
) -> SpawnGroup {
    SpawnGroup {
        count,
        size,
        speed,
        color,
        role,
        species,
    }
}

/// Spawn rosters, index 0 = level 1
pub const LEVEL_ROSTERS: [&[SpawnGroup]; MAX_LEVEL as usize] = [
    // Small Fish World
    &[
        group(15, 10, 2.0, Color::rgb(0, 255, 0), Role::Prey, "plankton"),
        group(10, 15, 3.0, Color::rgb(0, 255, 255), Role::Prey, "tiny_fish"),
        group(5, 40, 4.0, Color::rgb(255, 0, 0), Role::Predator, "medium_fish"),
    ],
    // Crab's Domain
    &[
        group(12, 20, 3.0, Color::rgb(255, 192, 203), Role::Prey, "shrimp"),
        group(6, 45, 3.5, Color::rgb(128, 0, 128), Role::Predator, "octopus"),
    ],
    // Sea Snake Adventure
    &[
        group(8, 25, 4.0, Color::rgb(255, 215, 0), Role::Prey, "medium_fish"),
        group(4, 50, 4.5, Color::rgb(139, 69, 19), Role::Predator, "moray_eel"),
    ],
    // Shark Territory
    &[
        group(6, 30, 4.5, Color::rgb(70, 130, 180), Role::Prey, "sea_snake"),
        group(3, 60, 5.0, Color::rgb(0, 0, 0), Role::Predator, "killer_whale"),
    ],
];

/// Roster for a level; out-of-range levels use the nearest defined one
pub fn roster_for_level(level: u32) -> &'static [SpawnGroup] {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    LEVEL_ROSTERS[idx]
}

/// The live prey and predator sets. A creature lives in exactly one of them.
#[derive(Debug, Clone)]
pub struct Population {
    pub prey: Vec<Creature>,
    pub predators: Vec<Creature>,
    next_id: u32,
}

impl Default for Population {
    fn default() -> Self {
        Self::new()
    }
}

impl Population {
    pub fn new() -> Self {
        Self {
            prey: Vec::new(),
            predators: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new creature ID
    fn next_creature_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.prey.len() + self.predators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prey.is_empty() && self.predators.is_empty()
    }

    /// Every live creature, prey first
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.prey.iter().chain(self.predators.iter())
    }

    /// Replace the whole population with the roster for `level`
    pub fn spawn_level<R: Rng + ?Sized>(&mut self, level: u32, bounds: &WorldBounds, rng: &mut R) {
        self.prey.clear();
        self.predators.clear();

        for group in roster_for_level(level) {
            for _ in 0..group.count {
                let pos = Vec2::new(
                    rng.random_range(0.0..=bounds.width),
                    rng.random_range(0.0..=bounds.height),
                );
                let dir = spawn_heading(rng);
                let creature = Creature {
                    id: self.next_creature_id(),
                    role: group.role,
                    body: Body::new(pos, dir, group.speed, group.size),
                    species: group.species,
                    color: group.color,
                };
                match group.role {
                    Role::Prey => self.prey.push(creature),
                    Role::Predator => self.predators.push(creature),
                }
            }
        }

        log::debug!(
            "Level {} spawned: {} prey, {} predators",
            level,
            self.prey.len(),
            self.predators.len()
        );
    }

    /// Advance every creature one tick. Only predators see the player.
    pub fn update<R: Rng + ?Sized>(&mut self, player_pos: Vec2, bounds: &WorldBounds, rng: &mut R) {
        for creature in &mut self.prey {
            creature.update(None, bounds, rng);
        }
        for creature in &mut self.predators {
            creature.update(Some(player_pos), bounds, rng);
        }
    }

    /// Remove the listed creatures. IDs not present are ignored.
    pub fn remove(&mut self, ids: &[u32]) {
        if ids.is_empty() {
            return;
        }
        self.prey.retain(|c| !ids.contains(&c.id));
        self.predators.retain(|c| !ids.contains(&c.id));
    }

    /// Ensure stable iteration order by ID
    pub fn normalize_order(&mut self) {
        self.prey.sort_by_key(|c| c.id);
        self.predators.sort_by_key(|c| c.id);
    }
}
