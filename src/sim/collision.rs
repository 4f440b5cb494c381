//! Collision detection.
//!
//! Pure predicates only; consequences are applied by the tick orchestrator
//! after querying them. Rectangles are built from rounded positions with
//! inclusive edges, so resolution is frame-discrete and sub-cell steering
//! never causes phantom overlaps or misses.

use glam::{IVec2, UVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts;

/// Axis-aligned rectangle over display cells, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Rectangle for a sprite at `pos` of `size` cells. Edges name the
    /// occupied cells themselves: a 3-wide sprite at x=10 spans 10..=12.
    pub fn new(pos: IVec2, size: UVec2) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x as i32 - 1,
            bottom: pos.y + size.y as i32 - 1,
        }
    }
}

/// Inclusive AABB overlap test: true unless some axis separates the
/// rectangles. Sprites sharing a single cell count as overlapping.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !(a.bottom < b.top || a.top > b.bottom || a.right < b.left || a.left > b.right)
}

/// Patrol bounds for attacking aliens; an exit ends the attack run.
#[inline]
pub fn alien_out_of_bounds(pos: Vec2) -> bool {
    pos.y < consts::TOP_WALL + 1.0
        || pos.y >= consts::BOTTOM_WALL - 1.0
        || pos.x >= consts::RIGHT_WALL - 1.0
        || pos.x <= consts::LEFT_WALL + 1.0
}

/// Patrol bounds for the mothership, inset further than the alien bounds
/// so the large sprite stays on the field.
#[inline]
pub fn boss_out_of_bounds(pos: Vec2) -> bool {
    pos.y <= consts::TOP_WALL + 1.0
        || pos.y >= consts::BOTTOM_WALL - 5.0
        || pos.x >= consts::RIGHT_WALL - 5.0
        || pos.x <= consts::LEFT_WALL + 1.0
}

/// Field-exit test for both missile kinds; an exited missile is spent.
#[inline]
pub fn missile_out_of_field(pos: Vec2) -> bool {
    pos.y < consts::MISSILE_EXIT_TOP
        || pos.y > consts::FIELD_HEIGHT as f32
        || pos.x < 1.0
        || pos.x > consts::FIELD_WIDTH as f32
}
