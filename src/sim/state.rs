//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::achievements::{Achievement, AchievementTracker};
use super::creature::Role;
use super::particles::ParticleSystem;
use super::player::Player;
use super::population::Population;
use super::world::WorldBounds;
use crate::consts::{BUBBLE_CHANCE, MAX_PARTICLES};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start signal
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player was eaten; only a restart leaves this phase
    GameOver,
}

/// Something that happened during a tick, for audio and UI to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    /// The player ate a creature
    Eat { role: Role, points: u64 },
    /// The player was eaten
    Hurt,
    /// Level cleared; `level` is the level now being played
    LevelUp { level: u32 },
    AchievementUnlocked(Achievement),
    Restarted,
}

/// Gameplay knobs the simulation reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub seed: u64,
    pub bounds: WorldBounds,
    pub max_particles: usize,
    /// Per-tick chance of an ambient bubble (0 disables them)
    pub bubble_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            bounds: WorldBounds::default(),
            max_particles: MAX_PARTICLES,
            bubble_chance: BUBBLE_CHANCE,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    /// Simulation RNG; every random draw goes through it
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Current level (1-based, capped at the last roster)
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub population: Population,
    pub particles: ParticleSystem,
    pub achievements: AchievementTracker,
    /// Events raised by the most recent tick
    pub(crate) events: Vec<GameEvent>,
    quit_requested: bool,
}

impl GameState {
    /// Create a new game state in the menu, with level 1 already spawned
    pub fn new(config: SimConfig) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        let mut state = Self {
            player: Player::spawn(&config.bounds, 1),
            particles: ParticleSystem::new(config.max_particles),
            config,
            rng,
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            time_ticks: 0,
            population: Population::new(),
            achievements: AchievementTracker::new(),
            events: Vec::new(),
            quit_requested: false,
        };

        state.spawn_level();
        state
    }

    /// Default configuration with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimConfig {
            seed,
            ..SimConfig::default()
        })
    }

    pub fn bounds(&self) -> WorldBounds {
        self.config.bounds
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Fresh player and population for the current level
    pub(crate) fn spawn_level(&mut self) {
        let bounds = self.config.bounds;
        self.player = Player::spawn(&bounds, self.level);
        self.population.spawn_level(self.level, &bounds, &mut self.rng);
    }

    /// Full reinitialization back to the menu. The RNG stream carries on.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Menu;
        self.score = 0;
        self.level = 1;
        self.time_ticks = 0;
        self.particles.clear();
        self.achievements = AchievementTracker::new();
        self.spawn_level();
        log::info!("Game restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_in_menu_at_level_one() {
        let state = GameState::with_seed(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.population.prey.len(), 25);
        assert_eq!(state.population.predators.len(), 5);
        assert_eq!(state.player.size(), 30);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = GameState::with_seed(1234);
        let b = GameState::with_seed(1234);
        let pa: Vec<_> = a.population.iter().map(|c| c.body.pos).collect();
        let pb: Vec<_> = b.population.iter().map(|c| c.body.pos).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::with_seed(5);
        state.phase = GamePhase::GameOver;
        state.score = 420;
        state.level = 3;
        state.player.grow();
        state.population.prey.clear();
        state.achievements.record_meals(3);

        state.restart();

        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.player.size(), 30);
        assert_eq!(state.population.prey.len(), 25);
        assert!(state.particles.is_empty());
        assert_eq!(state.achievements.stats.creatures_eaten, 0);
    }
}
