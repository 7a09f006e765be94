//! Per-playthrough statistics and achievements
//!
//! Nothing here is persisted; a restart starts a fresh tracker.

use serde::{Deserialize, Serialize};

/// Achievement kinds, unlocked at most once per playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    /// Eat your first creature
    FirstCatch,
    /// Eat 10 creatures
    BigEater,
    /// Travel 1000 units
    Speedster,
    /// Reach level 3
    Survivor,
    /// Score 1000 points
    MasterHunter,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstCatch,
        Achievement::BigEater,
        Achievement::Speedster,
        Achievement::Survivor,
        Achievement::MasterHunter,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstCatch => "First Catch!",
            Achievement::BigEater => "Big Eater",
            Achievement::Speedster => "Speedster",
            Achievement::Survivor => "Survivor",
            Achievement::MasterHunter => "Master Hunter",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstCatch => "Catch your first prey",
            Achievement::BigEater => "Eat 10 creatures in a single game",
            Achievement::Speedster => "Travel 1000 units in a single game",
            Achievement::Survivor => "Reach level 3",
            Achievement::MasterHunter => "Score 1000 points",
        }
    }
}

/// Thresholds
pub const BIG_EATER_MEALS: u32 = 10;
pub const SPEEDSTER_DISTANCE: f32 = 1000.0;
pub const SURVIVOR_LEVEL: u32 = 3;
pub const MASTER_HUNTER_SCORE: u64 = 1000;

/// Running totals for the current playthrough
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub creatures_eaten: u32,
    pub distance_traveled: f32,
    pub ticks_played: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementTracker {
    pub stats: SessionStats,
    /// Unlocked achievements, in unlock order
    pub unlocked: Vec<Achievement>,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    /// Record one tick of play and the distance the player moved during it
    pub fn record_tick(&mut self, distance: f32) {
        self.stats.ticks_played += 1;
        self.stats.distance_traveled += distance;
    }

    pub fn record_meals(&mut self, count: usize) {
        self.stats.creatures_eaten += count as u32;
    }

    /// Unlock anything newly earned. Returns the fresh unlocks in a stable order.
    pub fn check(&mut self, score: u64, level: u32) -> Vec<Achievement> {
        let stats = &self.stats;
        let earned: Vec<Achievement> = Achievement::ALL
            .into_iter()
            .filter(|a| match a {
                Achievement::FirstCatch => stats.creatures_eaten >= 1,
                Achievement::BigEater => stats.creatures_eaten >= BIG_EATER_MEALS,
                Achievement::Speedster => stats.distance_traveled >= SPEEDSTER_DISTANCE,
                Achievement::Survivor => level >= SURVIVOR_LEVEL,
                Achievement::MasterHunter => score >= MASTER_HUNTER_SCORE,
            })
            .filter(|a| !self.unlocked.contains(a))
            .collect();

        for achievement in &earned {
            log::info!(
                "Achievement unlocked: {} ({})",
                achievement.title(),
                achievement.description()
            );
        }
        self.unlocked.extend_from_slice(&earned);
        earned
    }
}
