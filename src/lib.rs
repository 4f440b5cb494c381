//! Alien Horde: a fixed-tick arcade shooter simulation.
//!
//! A player ship evades and destroys a wave of aliens and a multi-phase
//! mothership on an 84x48 cell playfield. The interesting parts live in
//! [`sim`]: steering, probabilistic attack gates, inclusive AABB collision,
//! and the per-tick state machine. Everything else is thin host plumbing.
//!
//! Module layout:
//! - [`sim`]: pure deterministic gameplay simulation
//! - [`clock`]: shared elapsed-time counter (the host's "hardware timer")
//! - [`settings`]: host configuration loaded from JSON

pub mod clock;
pub mod settings;
pub mod sim;

/// Gameplay constants shared across modules.
pub mod consts {
    use glam::{IVec2, UVec2, Vec2};

    /// Playfield width in display cells.
    pub const FIELD_WIDTH: u32 = 84;
    /// Playfield height in display cells.
    pub const FIELD_HEIGHT: u32 = 48;

    /// Ship movement limit: up is blocked at or above this row.
    pub const TOP_WALL: f32 = 11.0;
    /// Ship movement limit: left is blocked at or left of this column.
    pub const LEFT_WALL: f32 = 2.0;
    /// Ship movement limit: right is blocked at or right of this column.
    pub const RIGHT_WALL: f32 = 80.0;
    /// Ship movement limit: down is blocked at or below this row.
    pub const BOTTOM_WALL: f32 = 44.0;

    /// Top-left corner band reserved for HUD text; nothing spawns inside
    /// the square where both coordinates are below this value.
    pub const UI_BAND: i32 = 15;

    /// Ship sprite size in cells.
    pub const SHIP_SIZE: UVec2 = UVec2::new(3, 3);
    /// Alien sprite size in cells.
    pub const ALIEN_SIZE: UVec2 = UVec2::new(3, 3);
    /// Player missile sprite size in cells.
    pub const MISSILE_SIZE: UVec2 = UVec2::new(2, 2);
    /// Mothership sprite size in cells.
    pub const BOSS_SIZE: UVec2 = UVec2::new(8, 8);
    /// Mothership missile sprite size in cells.
    pub const BOSS_MISSILE_SIZE: UVec2 = UVec2::new(3, 1);

    /// Spawn draw margin for the ship (with the origin, draws land in
    /// 0..81 x 10..45).
    pub const SHIP_SPAWN_MARGIN: UVec2 = UVec2::new(3, 13);
    /// Spawn draw margin for aliens.
    pub const ALIEN_SPAWN_MARGIN: UVec2 = UVec2::new(15, 15);
    /// Spawn draw margin for the mothership.
    pub const BOSS_SPAWN_MARGIN: UVec2 = UVec2::new(20, 20);

    /// Spawn draw origin for the ship; the row floor keeps respawns out
    /// of the status text rows.
    pub const SHIP_SPAWN_ORIGIN: IVec2 = IVec2::new(0, 10);
    /// Spawn draw origin for aliens (draws land in 12..81 x 12..45).
    pub const ALIEN_SPAWN_ORIGIN: IVec2 = IVec2::new(12, 12);
    /// Spawn draw origin for the mothership (draws land in 12..76 x 12..40).
    pub const BOSS_SPAWN_ORIGIN: IVec2 = IVec2::new(12, 12);

    /// Number of alien slots in the wave.
    pub const ALIEN_SLOTS: usize = 5;
    /// Number of player missile slots.
    pub const MISSILE_SLOTS: usize = 5;

    /// Lives at the start of a session.
    pub const STARTING_LIVES: u32 = 6;
    /// Mothership health at spawn.
    pub const BOSS_MAX_HEALTH: u32 = 10;
    /// Score for destroying one alien.
    pub const ALIEN_SCORE: u32 = 1;
    /// Score bonus for destroying the mothership.
    pub const BOSS_SCORE: u32 = 10;

    /// Alien pursuit speed in cells per tick.
    pub const ALIEN_SPEED: f32 = 1.5;
    /// Mothership pursuit speed in cells per tick.
    pub const BOSS_SPEED: f32 = 0.75;
    /// Mothership missile speed in cells per tick.
    pub const BOSS_MISSILE_SPEED: f32 = 1.0;
    /// Player missile speed in cells per tick.
    pub const PLAYER_MISSILE_SPEED: f32 = 1.5;

    /// Alien attack gate: two draws from `0..ALIEN_ATTACK_ODDS` must match.
    pub const ALIEN_ATTACK_ODDS: u32 = 30;
    /// Mothership attack gate range.
    pub const BOSS_ATTACK_ODDS: u32 = 50;
    /// Mothership missile launch gate range.
    pub const BOSS_MISSILE_ODDS: u32 = 10;

    /// Nominal tick period in milliseconds.
    pub const TICK_MS: u64 = 50;

    /// Seek distances below this count as "already arrived".
    pub const SEEK_EPSILON: f32 = 1e-3;

    /// Parking spot for spent projectiles, far outside the field.
    pub const OFF_FIELD: Vec2 = Vec2::new(-1000.0, -1000.0);

    /// Missiles leaving the field above this row are spent (the HUD strip
    /// sits over the top rows).
    pub const MISSILE_EXIT_TOP: f32 = 10.0;
}
