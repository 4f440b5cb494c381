//! Simulated entities and their movement behavior.
//!
//! One [`Entity`] struct covers every moving object (ship, aliens,
//! missiles, mothership). Category differences live in the fixed size and
//! the [`Appearance`] tag, not in separate types.

use glam::{IVec2, UVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::collision::Rect;

/// Facing of the player ship, set by the last applied movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Velocity of magnitude `speed` along this direction.
    ///
    /// Screen coordinates, so `Up` is negative y.
    pub fn velocity(self, speed: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -speed),
            Direction::Down => Vec2::new(0.0, speed),
            Direction::Left => Vec2::new(-speed, 0.0),
            Direction::Right => Vec2::new(speed, 0.0),
        }
    }
}

/// Mothership damage phase, keyed to its remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Untouched (health 10..=9).
    Full,
    /// First damage sprite (health 8..=7).
    ThreeQuarters,
    /// Half damage sprite (health 6..=5).
    Half,
    /// Heavy damage sprite (health 4..=3).
    Quarter,
    /// About to blow (health 2..=1).
    Dying,
    /// Health 0; the slot is inert until the next spawn.
    Destroyed,
}

impl BossPhase {
    /// Phase for a health value in `0..=10`.
    pub fn for_health(health: u32) -> Self {
        match health {
            9..=10 => BossPhase::Full,
            7..=8 => BossPhase::ThreeQuarters,
            5..=6 => BossPhase::Half,
            3..=4 => BossPhase::Quarter,
            1..=2 => BossPhase::Dying,
            _ => BossPhase::Destroyed,
        }
    }
}

/// Bitmap/behavior variant an entity renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    /// Player ship, carrying its current facing.
    Ship(Direction),
    Alien,
    Missile,
    /// Mothership, carrying its damage phase.
    Boss(BossPhase),
    BossMissile,
}

/// Any simulated object: position, velocity, fixed size, visibility, look.
///
/// Positions keep sub-cell precision for smooth steering; collision and
/// rendering round to the nearest cell. `size` never changes after
/// creation, so it stays private.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    size: UVec2,
    pub visible: bool,
    pub appearance: Appearance,
}

impl Entity {
    /// New visible entity at rest.
    pub fn new(pos: Vec2, size: UVec2, appearance: Appearance) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            visible: true,
            appearance,
        }
    }

    /// New hidden entity at rest.
    pub fn hidden(pos: Vec2, size: UVec2, appearance: Appearance) -> Self {
        Self {
            visible: false,
            ..Self::new(pos, size, appearance)
        }
    }

    /// Size in cells, fixed at creation.
    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Position rounded to the nearest display cell.
    #[inline]
    pub fn grid_pos(&self) -> IVec2 {
        self.pos.round().as_ivec2()
    }

    /// Sprite center with the integer half-size offset the bitmaps use.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + (self.size / 2).as_vec2()
    }

    /// Collision rectangle at the current rounded position.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.grid_pos(), self.size)
    }

    /// Apply one tick of velocity. Reports whether the rounded position
    /// changed, so callers can skip redundant redraw work.
    pub fn advance(&mut self) -> bool {
        let before = self.grid_pos();
        self.pos += self.vel;
        self.grid_pos() != before
    }

    /// Point the velocity at `target` with magnitude `speed`.
    ///
    /// Targets closer than [`consts::SEEK_EPSILON`] count as already
    /// arrived and yield zero velocity.
    pub fn seek(&mut self, target: Vec2, speed: f32) {
        let offset = target - self.pos;
        let dist = offset.length();
        if dist < consts::SEEK_EPSILON {
            self.vel = Vec2::ZERO;
        } else {
            self.vel = offset / dist * speed;
        }
    }

    /// Teleport to `pos`, keeping velocity and visibility.
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_velocity_magnitude_matches_speed() {
        let mut e = Entity::new(Vec2::ZERO, consts::ALIEN_SIZE, Appearance::Alien);
        e.seek(Vec2::new(3.0, 4.0), 1.5);
        assert!((e.vel.length() - 1.5).abs() < 1e-4);
        assert!((e.vel.x - 0.9).abs() < 1e-4);
        assert!((e.vel.y - 1.2).abs() < 1e-4);
    }

    #[test]
    fn test_seek_zero_distance_yields_zero_velocity() {
        let mut e = Entity::new(Vec2::new(20.0, 20.0), consts::ALIEN_SIZE, Appearance::Alien);
        e.vel = Vec2::new(1.0, 1.0);
        e.seek(Vec2::new(20.0, 20.0), 1.5);
        assert_eq!(e.vel, Vec2::ZERO);

        e.vel = Vec2::new(1.0, 1.0);
        e.seek(Vec2::new(20.0, 20.0 + 1e-4), 1.5);
        assert_eq!(e.vel, Vec2::ZERO);
    }

    #[test]
    fn test_advance_reports_rounded_position_change() {
        let mut e = Entity::new(Vec2::ZERO, consts::MISSILE_SIZE, Appearance::Missile);
        e.vel = Vec2::new(0.4, 0.0);
        assert!(!e.advance()); // 0.4 still rounds to cell 0
        assert!(e.advance()); // 0.8 rounds to cell 1
        assert_eq!(e.grid_pos(), glam::IVec2::new(1, 0));
    }

    #[test]
    fn test_center_uses_integer_half_size() {
        let ship = Entity::new(
            Vec2::new(10.0, 10.0),
            consts::SHIP_SIZE,
            Appearance::Ship(Direction::Up),
        );
        assert_eq!(ship.center(), Vec2::new(11.0, 11.0));

        let boss = Entity::new(
            Vec2::new(10.0, 10.0),
            consts::BOSS_SIZE,
            Appearance::Boss(BossPhase::Full),
        );
        assert_eq!(boss.center(), Vec2::new(14.0, 14.0));

        let dart = Entity::new(
            Vec2::new(10.0, 10.0),
            consts::BOSS_MISSILE_SIZE,
            Appearance::BossMissile,
        );
        assert_eq!(dart.center(), Vec2::new(11.0, 10.0));
    }

    #[test]
    fn test_direction_velocity_axes() {
        assert_eq!(Direction::Up.velocity(1.5), Vec2::new(0.0, -1.5));
        assert_eq!(Direction::Down.velocity(1.5), Vec2::new(0.0, 1.5));
        assert_eq!(Direction::Left.velocity(1.5), Vec2::new(-1.5, 0.0));
        assert_eq!(Direction::Right.velocity(1.5), Vec2::new(1.5, 0.0));
    }

    #[test]
    fn test_boss_phase_health_mapping() {
        assert_eq!(BossPhase::for_health(10), BossPhase::Full);
        assert_eq!(BossPhase::for_health(9), BossPhase::Full);
        assert_eq!(BossPhase::for_health(8), BossPhase::ThreeQuarters);
        assert_eq!(BossPhase::for_health(7), BossPhase::ThreeQuarters);
        assert_eq!(BossPhase::for_health(6), BossPhase::Half);
        assert_eq!(BossPhase::for_health(5), BossPhase::Half);
        assert_eq!(BossPhase::for_health(4), BossPhase::Quarter);
        assert_eq!(BossPhase::for_health(3), BossPhase::Quarter);
        assert_eq!(BossPhase::for_health(2), BossPhase::Dying);
        assert_eq!(BossPhase::for_health(1), BossPhase::Dying);
        assert_eq!(BossPhase::for_health(0), BossPhase::Destroyed);
    }
}
