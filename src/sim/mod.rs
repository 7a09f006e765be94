//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod achievements;
pub mod collision;
pub mod creature;
pub mod entity;
pub mod particles;
pub mod player;
pub mod population;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use achievements::{Achievement, AchievementTracker, SessionStats};
pub use collision::{Contacts, Meal, resolve_contacts};
pub use creature::{Creature, Role};
pub use entity::{Body, Rect};
pub use particles::{Color, Particle, ParticleSystem};
pub use player::Player;
pub use population::{LEVEL_ROSTERS, Population, SpawnGroup, roster_for_level};
pub use snapshot::{CreatureView, ParticleView, PlayerView, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, SimConfig};
pub use tick::{TickInput, tick};
pub use world::WorldBounds;
