//! Demo input resolver
//!
//! Plays the game for the headless runner: flee the nearest predator that
//! could eat the player, otherwise swim toward the nearest meal. Produces the
//! same kind of intent vector a keyboard resolver would.

use glam::Vec2;

use crate::sim::{Creature, GameState};

/// Threats closer than this (center to center) trigger a flee
pub const FLEE_RADIUS: f32 = 200.0;
/// Offsets smaller than this on an axis do not press that axis
const AXIS_DEADBAND: f32 = 2.0;

/// Snap a direction to key-like components in {-1, 0, 1}
pub fn to_intent(v: Vec2) -> Vec2 {
    let axis = |c: f32| {
        if c > AXIS_DEADBAND {
            1.0
        } else if c < -AXIS_DEADBAND {
            -1.0
        } else {
            0.0
        }
    };
    Vec2::new(axis(v.x), axis(v.y))
}

fn nearest<'a>(
    from: Vec2,
    creatures: impl Iterator<Item = &'a Creature>,
) -> Option<(&'a Creature, f32)> {
    creatures
        .map(|c| (c, c.body.center().distance(from)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// Pick this tick's movement intent
pub fn intent(state: &GameState) -> Vec2 {
    let player = &state.player;
    let center = player.body.center();

    let threat = nearest(
        center,
        state
            .population
            .predators
            .iter()
            .filter(|c| player.can_be_eaten(c.size())),
    );
    if let Some((predator, dist)) = threat {
        if dist < FLEE_RADIUS {
            return to_intent(center - predator.body.center());
        }
    }

    let meal = nearest(
        center,
        state.population.iter().filter(|c| player.can_eat(c.size())),
    );
    match meal {
        Some((creature, _)) => to_intent(creature.body.center() - center),
        None => Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Body, Color, Role};

    /// Creature whose hitbox is centered on `center`
    fn creature(id: u32, role: Role, center: Vec2, size: u32) -> Creature {
        Creature {
            id,
            role,
            body: Body::new(center - Vec2::splat(size as f32 / 2.0), Vec2::X, 0.0, size),
            species: "test",
            color: Color::rgb(0, 0, 0),
        }
    }

    fn empty_state() -> GameState {
        let mut state = GameState::with_seed(1);
        state.population.prey.clear();
        state.population.predators.clear();
        state
    }

    #[test]
    fn test_to_intent_snaps_components() {
        assert_eq!(to_intent(Vec2::new(50.0, -0.5)), Vec2::new(1.0, 0.0));
        assert_eq!(to_intent(Vec2::new(-3.0, -90.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(to_intent(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_heads_for_nearest_meal() {
        let mut state = empty_state();
        let center = state.player.body.center();
        state.population.prey.push(creature(1, Role::Prey, center + Vec2::new(100.0, 0.0), 10));
        state.population.prey.push(creature(2, Role::Prey, center + Vec2::new(-300.0, 0.0), 10));
        assert_eq!(intent(&state), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_skips_prey_too_big_to_eat() {
        let mut state = empty_state();
        let center = state.player.body.center();
        state.population.prey.push(creature(1, Role::Prey, center + Vec2::new(50.0, 0.0), 30));
        assert_eq!(intent(&state), Vec2::ZERO);
    }

    #[test]
    fn test_flees_close_threat() {
        let mut state = empty_state();
        let center = state.player.body.center();
        state.population.prey.push(creature(1, Role::Prey, center + Vec2::new(-100.0, 0.0), 10));
        state
            .population
            .predators
            .push(creature(2, Role::Predator, center + Vec2::new(-120.0, -120.0), 60));
        assert_eq!(intent(&state), Vec2::new(1.0, 1.0));
    }
}
