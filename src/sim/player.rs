//! Player controller: input-driven movement, growth and eating thresholds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::world::WorldBounds;
use crate::consts::{EAT_RATIO_DEN, EAT_RATIO_NUM, GROWTH_STEP, PLAYER_SPEED, PLAYER_START_SIZE};

/// `a > b * 1.2` on integer sizes, evaluated exactly
#[inline]
fn exceeds_ratio(a: u32, b: u32) -> bool {
    a as u64 * EAT_RATIO_DEN > b as u64 * EAT_RATIO_NUM
}

/// The player's creature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Level this player was created for (picks the render skin)
    pub level: u32,
}

impl Player {
    /// Fresh player at its start size, top-left corner at `pos`
    pub fn new(pos: Vec2, level: u32) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, PLAYER_SPEED, PLAYER_START_SIZE),
            level,
        }
    }

    /// Player spawned at the level start point (world center)
    pub fn spawn(bounds: &WorldBounds, level: u32) -> Self {
        Self::new(bounds.center(), level)
    }

    pub fn size(&self) -> u32 {
        self.body.size
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Move by one tick of resolved input, then clamp inside the world.
    ///
    /// `intent` components are -1, 0 or 1; diagonals are normalized so they are
    /// no faster than axis-aligned movement.
    pub fn update(&mut self, intent: Vec2, bounds: &WorldBounds) {
        self.body.dir = intent.normalize_or_zero();
        self.body.face_toward(intent.x);
        self.body.step();
        self.body.pos = bounds.clamp_box(self.body.pos, self.body.size as f32);
    }

    /// Grow by one step, keeping the hitbox centered where it was
    pub fn grow(&mut self) {
        let center = self.body.center();
        self.body.size += GROWTH_STEP;
        self.body.pos = center - Vec2::splat(self.body.size as f32 / 2.0);
    }

    /// True iff this player is more than 20% larger than `other_size`
    pub fn can_eat(&self, other_size: u32) -> bool {
        exceeds_ratio(self.body.size, other_size)
    }

    /// True iff `other_size` is more than 20% larger than this player
    pub fn can_be_eaten(&self, other_size: u32) -> bool {
        exceeds_ratio(other_size, self.body.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player_of_size(size: u32) -> Player {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 1);
        player.body.size = size;
        player
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::spawn(&WorldBounds::default(), 2);
        assert_eq!(player.size(), 30);
        assert_eq!(player.pos(), Vec2::new(512.0, 384.0));
        assert_eq!(player.body.dir, Vec2::ZERO);
        assert_eq!(player.level, 2);
    }

    #[test]
    fn test_thresholds_from_scenarios() {
        let p = player_of_size(30);
        assert!(p.can_eat(15)); // 30 > 18
        assert!(p.can_be_eaten(40)); // 40 > 36
        assert!(!p.can_eat(40));

        // 50 > 38 * 1.2 = 45.6
        let big = player_of_size(50);
        assert!(big.can_eat(38));
        assert!(!big.can_be_eaten(38));
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        let p = player_of_size(30);
        // 36 == 30 * 1.2 exactly: not enough to eat the player
        assert!(!p.can_be_eaten(36));
        assert!(p.can_be_eaten(37));
        // 30 == 25 * 1.2 exactly: not enough for the player to eat
        assert!(!p.can_eat(25));
        assert!(p.can_eat(24));
    }

    #[test]
    fn test_deadzone_does_nothing() {
        let p = player_of_size(30);
        for other in 25..=36 {
            assert!(!p.can_eat(other), "can_eat({other})");
            assert!(!p.can_be_eaten(other), "can_be_eaten({other})");
        }
    }

    #[test]
    fn test_diagonal_not_faster() {
        let bounds = WorldBounds::default();
        let mut p = player_of_size(30);
        let start = p.pos();
        p.update(Vec2::new(1.0, 1.0), &bounds);
        let moved = (p.pos() - start).length();
        assert!((moved - PLAYER_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_idle_input_keeps_position_and_facing() {
        let bounds = WorldBounds::default();
        let mut p = player_of_size(30);
        p.update(Vec2::new(-1.0, 0.0), &bounds);
        assert!(!p.body.facing_right);
        let pos = p.pos();
        p.update(Vec2::ZERO, &bounds);
        assert_eq!(p.pos(), pos);
        assert_eq!(p.body.dir, Vec2::ZERO);
        assert!(!p.body.facing_right);
    }

    #[test]
    fn test_clamped_at_edges() {
        let bounds = WorldBounds::default();
        let mut p = player_of_size(30);
        p.body.pos = Vec2::new(2.0, 736.0);
        p.update(Vec2::new(-1.0, 1.0), &bounds);
        assert_eq!(p.pos().x, 0.0);
        assert_eq!(p.pos().y, 738.0);

        p.body.pos = Vec2::new(993.0, 1.0);
        p.update(Vec2::new(1.0, -1.0), &bounds);
        assert_eq!(p.pos(), Vec2::new(994.0, 0.0));
    }

    #[test]
    fn test_grow_preserves_center_and_facing() {
        let mut p = player_of_size(30);
        p.body.facing_right = false;
        let center = p.body.center();
        p.grow();
        assert_eq!(p.size(), 32);
        assert_eq!(p.body.center(), center);
        assert_eq!(p.pos(), Vec2::new(99.0, 99.0));
        assert!(!p.body.facing_right);
        assert_eq!(p.body.speed, PLAYER_SPEED);
    }

    proptest! {
        #[test]
        fn eating_is_never_mutual(a in 1u32..5000, b in 1u32..5000) {
            let pa = player_of_size(a);
            let pb = player_of_size(b);
            prop_assert_eq!(pa.can_eat(b), a as f64 > b as f64 * 1.2);
            prop_assert!(!(pa.can_eat(b) && pb.can_eat(a)));
            prop_assert_eq!(pa.can_eat(b), pb.can_be_eaten(a));
        }

        #[test]
        fn growth_is_two_per_meal(meals in 0u32..200) {
            let mut p = player_of_size(PLAYER_START_SIZE);
            for _ in 0..meals {
                p.grow();
            }
            prop_assert_eq!(p.size(), PLAYER_START_SIZE + 2 * meals);
        }
    }
}
