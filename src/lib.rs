//! Ocean Hunter - an eat-or-be-eaten arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, creature AI, eating rules, levels)
//! - `settings`: Data-driven configuration
//! - `audio`: Sound trigger boundary (backends are pluggable, missing ones are no-ops)
//! - `autopilot`: Demo input resolver used by the headless runner

pub mod audio;
pub mod autopilot;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const SIM_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 768.0;

    /// Player defaults
    pub const PLAYER_START_SIZE: u32 = 30;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Size gained per creature eaten
    pub const GROWTH_STEP: u32 = 2;

    /// Eating threshold is `eater > prey * 1.2`, kept as an exact integer ratio (6/5)
    pub const EAT_RATIO_NUM: u64 = 6;
    pub const EAT_RATIO_DEN: u64 = 5;

    /// Predators chase the player when strictly closer than this
    pub const CHASE_RADIUS: f32 = 300.0;
    /// Per-tick chance a wandering creature picks a new heading
    pub const WANDER_CHANCE: f64 = 0.02;

    /// Points
    pub const PREY_POINTS: u64 = 10;
    pub const PREDATOR_POINTS: u64 = 50;

    /// Last level with a spawn roster
    pub const MAX_LEVEL: u32 = 4;

    /// Particles
    pub const BURST_COUNT: usize = 5;
    pub const BUBBLE_CHANCE: f64 = 0.1;
    pub const MAX_PARTICLES: usize = 512;
}
