//! Spawn placement.
//!
//! Draws integer coordinates uniformly from a per-category window: the
//! playfield shrunk by a margin, shifted to a draw origin that clears the
//! status rows along the top. Candidates are re-drawn until they avoid the
//! HUD band and every forbidden grid cell. Termination is probabilistic;
//! with the field sizes in [`consts`] a handful of draws is typical.

use glam::{IVec2, UVec2, Vec2};
use rand::Rng;

use crate::consts;

/// Free cell for a sprite, drawn from `origin` with the given margin.
///
/// Panics when the origin and margin leave no legal candidate; that is a
/// setup bug, not a runtime condition.
pub fn place(rng: &mut impl Rng, origin: IVec2, margin: UVec2, forbidden: &[IVec2]) -> Vec2 {
    let span = IVec2::new(
        consts::FIELD_WIDTH.saturating_sub(margin.x) as i32,
        consts::FIELD_HEIGHT.saturating_sub(margin.y) as i32,
    );
    assert!(
        span.x > 0 && span.y > 0,
        "spawn margin {margin} exceeds the playfield"
    );
    assert!(
        origin.min_element() >= 0
            && origin.x + span.x <= consts::FIELD_WIDTH as i32
            && origin.y + span.y <= consts::FIELD_HEIGHT as i32,
        "spawn origin {origin} pushes the draw window off the field"
    );
    assert!(
        origin.x + span.x > consts::UI_BAND || origin.y + span.y > consts::UI_BAND,
        "spawn window at {origin} has no cell outside the HUD band"
    );

    loop {
        let candidate =
            origin + IVec2::new(rng.random_range(0..span.x), rng.random_range(0..span.y));
        if candidate.x < consts::UI_BAND && candidate.y < consts::UI_BAND {
            continue;
        }
        if forbidden.contains(&candidate) {
            continue;
        }
        return candidate.as_vec2();
    }
}

/// Placement for the player ship.
pub fn ship_position(rng: &mut impl Rng, forbidden: &[IVec2]) -> Vec2 {
    place(
        rng,
        consts::SHIP_SPAWN_ORIGIN,
        consts::SHIP_SPAWN_MARGIN,
        forbidden,
    )
}

/// Placement for one alien.
pub fn alien_position(rng: &mut impl Rng, forbidden: &[IVec2]) -> Vec2 {
    place(
        rng,
        consts::ALIEN_SPAWN_ORIGIN,
        consts::ALIEN_SPAWN_MARGIN,
        forbidden,
    )
}

/// Placement for the mothership.
pub fn boss_position(rng: &mut impl Rng, forbidden: &[IVec2]) -> Vec2 {
    place(
        rng,
        consts::BOSS_SPAWN_ORIGIN,
        consts::BOSS_SPAWN_MARGIN,
        forbidden,
    )
}
