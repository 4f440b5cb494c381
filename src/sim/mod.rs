//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one step per external 50 ms pulse)
//! - Seeded RNG only, injected into each tick
//! - Stable slot iteration order
//! - No rendering, input sampling, or platform dependencies
//!
//! The host drives [`tick`] once per pulse, reads back a [`Frame`] snapshot
//! for drawing, and drains [`GameEvent`]s for telemetry.

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use entity::{Appearance, BossPhase, Direction, Entity};
pub use state::{
    AlienSlot, Boss, EventKind, Frame, GameEvent, GamePhase, GameState, Hud, KillCause,
    MissileSlot, Sprite,
};
pub use tick::{TickInput, TickStatus, tick};
