//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is one
//! tick: player → creatures → particles → eating → level completion.

use glam::Vec2;

use super::collision::{Contacts, resolve_contacts};
use super::creature::Role;
use super::particles::Color;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{BURST_COUNT, MAX_LEVEL};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Resolved movement intent, each component -1, 0 or 1
    pub movement: Vec2,
    /// Leave the menu
    pub start: bool,
    /// Reinitialize after game over
    pub restart: bool,
    /// Pause toggle
    pub pause: bool,
    /// Stop the run; observed by the caller between ticks
    pub quit: bool,
}

impl TickInput {
    /// Movement-only input
    pub fn moving(movement: Vec2) -> Self {
        Self {
            movement,
            ..Default::default()
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.quit {
        state.request_quit();
        return;
    }

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Started);
                log::info!("Game started at level {}", state.level);
            } else {
                state.particles.tick();
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                log::debug!("Resumed");
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
                state.events.push(GameEvent::Restarted);
            } else {
                state.particles.tick();
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                log::debug!("Paused");
                return;
            }
            step_playing(state, input);
        }
    }
}

/// One tick of live gameplay
fn step_playing(state: &mut GameState, input: &TickInput) {
    let bounds = state.config.bounds;
    state.time_ticks += 1;

    // Player
    let before = state.player.pos();
    state.player.update(input.movement, &bounds);
    let moved = (state.player.pos() - before).length();
    state.achievements.record_tick(moved);

    // Creatures
    state
        .population
        .update(state.player.pos(), &bounds, &mut state.rng);

    // Particles
    state.particles.tick();

    // Eating
    let contacts = resolve_contacts(&mut state.player, &mut state.population);
    apply_contacts(state, &contacts);

    if contacts.player_eaten() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Hurt);
        log::info!("Eaten at level {} with score {}", state.level, state.score);
        return;
    }

    // Level completion ignores any predators left
    if state.population.prey.is_empty() {
        advance_level(state);
    }

    // Ambient bubbles
    state
        .particles
        .maybe_spawn_bubble(&bounds, state.config.bubble_chance, &mut state.rng);

    let unlocked = state.achievements.check(state.score, state.level);
    state
        .events
        .extend(unlocked.into_iter().map(GameEvent::AchievementUnlocked));

    // Ensure deterministic ordering
    state.population.normalize_order();
}

/// Score, bursts and events for everything eaten this tick
fn apply_contacts(state: &mut GameState, contacts: &Contacts) {
    for meal in &contacts.meals {
        state.score += meal.points;
        let color = match meal.role {
            Role::Prey => Color::YELLOW,
            Role::Predator => Color::RED,
        };
        state
            .particles
            .spawn(meal.center, color, BURST_COUNT, &mut state.rng);
        state.events.push(GameEvent::Eat {
            role: meal.role,
            points: meal.points,
        });
    }
    state.achievements.record_meals(contacts.meals.len());
}

/// Move on to the next level (staying on the last one), respawning player and creatures
fn advance_level(state: &mut GameState) {
    state.level = (state.level + 1).min(MAX_LEVEL);
    state.spawn_level();

    let center = state.player.body.center();
    for color in [Color::GOLD, Color::ORANGE, Color::ORANGE_RED] {
        state
            .particles
            .spawn(center, color, BURST_COUNT, &mut state.rng);
    }

    state.events.push(GameEvent::LevelUp { level: state.level });
    log::info!("Level up! Now on level {}", state.level);
}
