//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. Stage
//! order per tick: ship input, aliens, mothership, mothership missile,
//! player missiles, collision consequences, HUD clock.

use rand::Rng;

use super::collision::{self, overlaps};
use super::entity::{Appearance, BossPhase, Direction, Entity};
use super::spawn;
use super::state::{EventKind, GameEvent, GamePhase, GameState, KillCause};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move up one cell
    pub up: bool,
    /// Move down one cell
    pub down: bool,
    /// Move left one cell
    pub left: bool,
    /// Move right one cell
    pub right: bool,
    /// Fire a missile
    pub fire: bool,
    /// Monotonic session time reading in seconds, for HUD and telemetry
    /// timestamps only; simulation timing never depends on it
    pub elapsed_seconds: f64,
}

/// Outcome of one tick, for the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    GameOver,
}

/// Advance the game state by one fixed timestep.
///
/// The RNG drives the attack gates and any respawn placement this tick
/// needs; callers seed it per session for reproducible runs.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) -> TickStatus {
    if state.phase == GamePhase::GameOver {
        return TickStatus::GameOver;
    }

    apply_ship_input(state, input);
    update_aliens(state, rng);
    update_boss(state, rng);
    update_boss_missile(state, rng);
    update_player_missiles(state, input);
    resolve_collisions(state, rng, input.elapsed_seconds);
    roll_minute(state, input.elapsed_seconds);

    state.time_ticks += 1;

    match state.phase {
        GamePhase::GameOver => TickStatus::GameOver,
        GamePhase::Playing => TickStatus::Continue,
    }
}

/// Two draws from the same range must match for an attack to trigger.
fn attack_gate(rng: &mut impl Rng, odds: u32) -> bool {
    rng.random_range(0..odds) == rng.random_range(0..odds)
}

/// One cell per active intent, clamped at the walls. Applied in the fixed
/// order Up, Right, Down, Left; each applied move becomes the new facing,
/// a blocked move changes nothing.
fn apply_ship_input(state: &mut GameState, input: &TickInput) {
    if input.up && state.ship.pos.y > TOP_WALL {
        state.ship.pos.y -= 1.0;
        state.ship.appearance = Appearance::Ship(Direction::Up);
    }
    if input.right && state.ship.pos.x < RIGHT_WALL {
        state.ship.pos.x += 1.0;
        state.ship.appearance = Appearance::Ship(Direction::Right);
    }
    if input.down && state.ship.pos.y < BOTTOM_WALL {
        state.ship.pos.y += 1.0;
        state.ship.appearance = Appearance::Ship(Direction::Down);
    }
    if input.left && state.ship.pos.x > LEFT_WALL {
        state.ship.pos.x -= 1.0;
        state.ship.appearance = Appearance::Ship(Direction::Left);
    }
}

/// Gate idle aliens into an attack run, then advance the attackers.
/// Pursuit is straight-line: the seek vector is aimed once, on the tick
/// the gate opens.
fn update_aliens(state: &mut GameState, rng: &mut impl Rng) {
    let target = state.ship.pos;
    for slot in &mut state.aliens {
        if !slot.entity.visible {
            continue;
        }
        if !slot.attacking && attack_gate(rng, ALIEN_ATTACK_ODDS) {
            slot.attacking = true;
            slot.entity.seek(target, ALIEN_SPEED);
        }
        if slot.attacking {
            slot.entity.advance();
            if collision::alien_out_of_bounds(slot.entity.pos) {
                slot.attacking = false;
            }
        }
    }
}

/// Same pattern as the aliens with longer odds, slower speed, and the
/// tighter patrol bounds the large sprite needs.
fn update_boss(state: &mut GameState, rng: &mut impl Rng) {
    if !state.boss_active || !state.boss.entity.visible {
        return;
    }
    let target = state.ship.pos;
    let boss = &mut state.boss;
    if !boss.attacking && attack_gate(rng, BOSS_ATTACK_ODDS) {
        boss.attacking = true;
        boss.entity.seek(target, BOSS_SPEED);
    }
    if boss.attacking {
        boss.entity.advance();
        if collision::boss_out_of_bounds(boss.entity.pos) {
            boss.attacking = false;
        }
    }
}

/// Fly the mothership missile, or launch a fresh one from the
/// mothership's center at unit speed.
fn update_boss_missile(state: &mut GameState, rng: &mut impl Rng) {
    if state.boss_missile.visible {
        state.boss_missile.advance();
        if collision::missile_out_of_field(state.boss_missile.pos) {
            state.boss_missile.hide();
        }
    } else if state.boss_active
        && state.boss.entity.visible
        && attack_gate(rng, BOSS_MISSILE_ODDS)
    {
        let target = state.ship.pos;
        state.boss_missile.move_to(state.boss.entity.center());
        state.boss_missile.seek(target, BOSS_MISSILE_SPEED);
        state.boss_missile.show();
    }
}

/// Direction assignment, firing, then flight.
///
/// Assignment runs before firing, so a freshly fired missile keeps
/// whatever velocity its slot last had until the next tick. A fire intent
/// with no free slot is dropped.
fn update_player_missiles(state: &mut GameState, input: &TickInput) {
    let facing = state.ship_facing();
    for slot in &mut state.missiles {
        if slot.entity.visible && slot.needs_direction {
            slot.entity.vel = facing.velocity(PLAYER_MISSILE_SPEED);
            slot.needs_direction = false;
        }
    }

    if input.fire {
        let launch = state.ship.center();
        if let Some(slot) = state.missiles.iter_mut().find(|s| !s.entity.visible) {
            slot.entity.move_to(launch);
            slot.entity.show();
            slot.needs_direction = true;
        }
    }

    for slot in &mut state.missiles {
        if slot.entity.visible {
            slot.entity.advance();
            if collision::missile_out_of_field(slot.entity.pos) {
                slot.entity.hide();
            }
        }
    }
}

/// Overlap checks in priority order; at most one life lost per tick, and
/// a game over cuts the pass short.
fn resolve_collisions(state: &mut GameState, rng: &mut impl Rng, now: f64) {
    let mut life_lost = false;

    // Ship vs aliens
    let ship_rect = state.ship.rect();
    if state
        .aliens
        .iter()
        .any(|slot| slot.entity.visible && overlaps(ship_rect, slot.entity.rect()))
    {
        lose_life(state, rng, now, KillCause::Alien);
        life_lost = true;
        if state.phase == GamePhase::GameOver {
            return;
        }
    }

    // Missiles vs aliens
    for a in 0..state.aliens.len() {
        if !state.aliens[a].entity.visible {
            continue;
        }
        let alien_rect = state.aliens[a].entity.rect();
        for m in 0..state.missiles.len() {
            if !state.missiles[m].entity.visible {
                continue;
            }
            if !overlaps(state.missiles[m].entity.rect(), alien_rect) {
                continue;
            }
            state.missiles[m].entity.move_to(OFF_FIELD);
            state.missiles[m].entity.hide();
            state.aliens[a].entity.hide();
            state.score += ALIEN_SCORE;
            state.alive_alien_count -= 1;
            state
                .events
                .push(GameEvent::new(now, EventKind::AlienDestroyed { slot: a }));
            if state.alive_alien_count == 0 {
                state.spawn_boss(rng, now);
            }
            break; // this alien is gone; remaining missiles fly on
        }
    }

    // Ship vs mothership
    if state.boss_active
        && state.boss.entity.visible
        && !life_lost
        && overlaps(state.ship.rect(), state.boss.entity.rect())
    {
        lose_life(state, rng, now, KillCause::Boss);
        life_lost = true;
        if state.phase == GamePhase::GameOver {
            return;
        }
    }

    // Missiles vs mothership
    if state.boss_active && state.boss.entity.visible {
        let boss_rect = state.boss.entity.rect();
        for m in 0..state.missiles.len() {
            if !state.missiles[m].entity.visible {
                continue;
            }
            if !overlaps(state.missiles[m].entity.rect(), boss_rect) {
                continue;
            }
            state.missiles[m].entity.move_to(OFF_FIELD);
            state.missiles[m].entity.hide();
            boss_hit(state, rng, now);
            if !state.boss_active {
                break; // destroyed; the fresh wave owns the field now
            }
        }
    }

    // Ship vs mothership missile
    if state.boss_missile.visible
        && !life_lost
        && overlaps(state.ship.rect(), state.boss_missile.rect())
    {
        state.boss_missile.move_to(OFF_FIELD);
        state.boss_missile.hide();
        lose_life(state, rng, now, KillCause::BossMissile);
    }
}

/// One life down: telemetry first, then either game over or a fresh ship
/// placed away from every visible alien.
fn lose_life(state: &mut GameState, rng: &mut impl Rng, now: f64, cause: KillCause) {
    let lives_left = if state.lives == 1 { 1 } else { state.lives - 1 };
    state.events.push(GameEvent::new(
        now,
        EventKind::PlayerKilled { cause, lives_left },
    ));

    if state.lives == 1 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::new(
            now,
            EventKind::GameOver { score: state.score },
        ));
        log::info!("Game over with score {}", state.score);
        return;
    }

    for slot in &mut state.missiles {
        slot.entity.hide();
    }
    let forbidden = state.visible_alien_cells();
    state.ship = Entity::new(
        spawn::ship_position(rng, &forbidden),
        SHIP_SIZE,
        Appearance::Ship(Direction::Up),
    );
    state.lives -= 1;
}

/// One missile hit on the mothership: damage phase, or destruction once
/// health falls to 1.
fn boss_hit(state: &mut GameState, rng: &mut impl Rng, now: f64) {
    state.boss.health = state.boss.health.saturating_sub(1);

    if state.boss.health <= 1 {
        state.boss.entity.hide();
        state.boss.attacking = false;
        state.boss_active = false;
        state.boss_missile.move_to(OFF_FIELD);
        state.boss_missile.hide();
        state.score += BOSS_SCORE;
        state
            .events
            .push(GameEvent::new(now, EventKind::BossDestroyed));
        state.respawn_alien_wave(rng);
        return;
    }

    let phase = BossPhase::for_health(state.boss.health);
    if state.boss.entity.appearance != Appearance::Boss(phase) {
        state
            .events
            .push(GameEvent::new(now, EventKind::BossPhaseChanged { phase }));
    }
    state.boss.entity.appearance = Appearance::Boss(phase);
}

/// HUD clock: a minute rolls over once more than 59 s elapse within it.
fn roll_minute(state: &mut GameState, elapsed_seconds: f64) {
    if elapsed_seconds - state.minute_epoch > 59.0 {
        state.minutes += 1;
        state.minute_epoch = elapsed_seconds;
    }
}
