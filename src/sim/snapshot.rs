//! Read-only render projection of the game state.
//!
//! Renderers consume these views and never touch `GameState` directly.

use glam::Vec2;
use serde::Serialize;

use super::achievements::Achievement;
use super::particles::Color;
use super::state::{GamePhase, GameState};

/// Lightweight view of the player for rendering
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: u32,
    pub facing_right: bool,
    pub level: u32,
}

/// Lightweight view of a creature for rendering
#[derive(Debug, Clone, Serialize)]
pub struct CreatureView {
    pub id: u32,
    pub pos: Vec2,
    pub size: u32,
    pub facing_right: bool,
    pub is_predator: bool,
    pub species: &'static str,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: u32,
    pub color: Color,
    pub alpha: u8,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub player: PlayerView,
    pub creatures: Vec<CreatureView>,
    pub particles: Vec<ParticleView>,
    pub achievements: Vec<Achievement>,
}

impl GameState {
    /// Create a snapshot from the current state
    pub fn snapshot(&self) -> Snapshot {
        let body = &self.player.body;
        Snapshot {
            time_ticks: self.time_ticks,
            phase: self.phase,
            score: self.score,
            level: self.level,
            player: PlayerView {
                pos: body.pos,
                size: body.size,
                facing_right: body.facing_right,
                level: self.player.level,
            },
            creatures: self
                .population
                .iter()
                .map(|c| CreatureView {
                    id: c.id,
                    pos: c.body.pos,
                    size: c.body.size,
                    facing_right: c.body.facing_right,
                    is_predator: c.is_predator(),
                    species: c.species,
                    color: c.color,
                })
                .collect(),
            particles: self
                .particles
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    size: p.size,
                    color: p.color,
                    alpha: p.alpha,
                })
                .collect(),
            achievements: self.achievements.unlocked.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::GameState;

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::with_seed(10);
        let snap = state.snapshot();
        assert_eq!(snap.level, 1);
        assert_eq!(snap.player.size, 30);
        assert_eq!(snap.creatures.len(), 30);
        assert_eq!(snap.creatures.iter().filter(|c| c.is_predator).count(), 5);
        assert!(snap.particles.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::with_seed(10);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
        assert!(json.contains("plankton"));
    }
}
