//! Collision detection and the eating rules
//!
//! Hitboxes are axis-aligned squares. Every live creature is tested against
//! the player once per tick; removals are collected during the scan and
//! applied afterwards so the sets are never mutated while being walked.

use glam::Vec2;

use super::creature::{Creature, Role};
use super::player::Player;
use super::population::Population;
use crate::consts::{PREDATOR_POINTS, PREY_POINTS};

/// A creature the player ate this tick
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub id: u32,
    pub role: Role,
    pub size: u32,
    /// Hitbox center at the moment it was eaten (burst origin)
    pub center: Vec2,
    pub points: u64,
}

impl Meal {
    fn from_creature(creature: &Creature) -> Self {
        let points = match creature.role {
            Role::Prey => PREY_POINTS,
            Role::Predator => PREDATOR_POINTS,
        };
        Self {
            id: creature.id,
            role: creature.role,
            size: creature.size(),
            center: creature.body.center(),
            points,
        }
    }
}

/// Outcome of one tick of contact resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    /// Creatures eaten, in resolution order
    pub meals: Vec<Meal>,
    /// ID of the predator that ate the player, if any
    pub eaten_by: Option<u32>,
}

impl Contacts {
    pub fn player_eaten(&self) -> bool {
        self.eaten_by.is_some()
    }

    pub fn points(&self) -> u64 {
        self.meals.iter().map(|m| m.points).sum()
    }
}

/// Resolve every player/creature overlap for this tick.
///
/// Prey are checked first, then predators. The player grows immediately on
/// each meal, so later checks in the same tick see the larger size. Prey
/// never hurt the player. For predators, being eaten takes precedence over
/// eating, and resolution stops as soon as the player is eaten.
pub fn resolve_contacts(player: &mut Player, population: &mut Population) -> Contacts {
    let mut contacts = Contacts::default();

    for prey in &population.prey {
        if !player.body.rect().overlaps(&prey.body.rect()) {
            continue;
        }
        if player.can_eat(prey.size()) {
            player.grow();
            contacts.meals.push(Meal::from_creature(prey));
        }
    }

    for predator in &population.predators {
        if !player.body.rect().overlaps(&predator.body.rect()) {
            continue;
        }
        if player.can_be_eaten(predator.size()) {
            contacts.eaten_by = Some(predator.id);
            break;
        } else if player.can_eat(predator.size()) {
            player.grow();
            contacts.meals.push(Meal::from_creature(predator));
        }
    }

    let eaten: Vec<u32> = contacts.meals.iter().map(|m| m.id).collect();
    population.remove(&eaten);

    contacts
}
