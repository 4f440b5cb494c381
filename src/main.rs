//! Alien Horde entry point
//!
//! Headless demo host: drives the simulation with a scripted pilot, paces
//! ticks off the shared game clock, and reports telemetry through the log
//! (or as JSON lines for downstream tooling).

use std::thread;
use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use alien_horde::clock::GameClock;
use alien_horde::consts::*;
use alien_horde::settings::Settings;
use alien_horde::sim::{EventKind, GameState, KillCause, TickInput, TickStatus, tick};

/// Cadence of the background clock writer in realtime mode.
const CLOCK_STEP_MS: u64 = 16;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let base_seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Alien Horde starting: seed {base_seed}, {} session(s), {} clock",
        settings.sessions,
        if settings.realtime { "realtime" } else { "fast" },
    );

    let clock = GameClock::new();
    if settings.realtime {
        spawn_clock_thread(clock.clone());
    }

    let mut rng = Pcg32::seed_from_u64(base_seed.wrapping_add(1));
    let mut state = GameState::new(&mut rng);

    for session in 1..=settings.sessions {
        if session > 1 {
            rng = Pcg32::seed_from_u64(base_seed.wrapping_add(u64::from(session)));
            state.reset(&mut rng);
            clock.reset();
        }
        run_session(&mut state, &mut rng, &clock, &settings, session);
    }
}

/// Background writer that advances the shared clock at a fixed cadence,
/// independent of the tick loop.
fn spawn_clock_thread(clock: GameClock) {
    thread::Builder::new()
        .name("game-clock".into())
        .spawn(move || {
            loop {
                thread::sleep(Duration::from_millis(CLOCK_STEP_MS));
                clock.advance(CLOCK_STEP_MS);
            }
        })
        .expect("failed to spawn clock thread");
}

/// Drive one session to game over or the tick cap.
fn run_session(
    state: &mut GameState,
    rng: &mut Pcg32,
    clock: &GameClock,
    settings: &Settings,
    session: u32,
) {
    log::info!("Session {session} of {} starting", settings.sessions);

    let mut ticks: u64 = 0;
    let outcome = loop {
        if settings.realtime {
            thread::sleep(Duration::from_millis(TICK_MS));
        } else {
            clock.advance(TICK_MS);
        }

        let mut input = pilot(state, ticks);
        input.elapsed_seconds = clock.elapsed_seconds();
        let status = tick(state, &input, rng);
        ticks += 1;

        report_events(state, settings.json_events);
        if ticks.is_multiple_of(40) {
            log::debug!(
                "Ship at {}, aiming {:?}",
                state.ship.grid_pos(),
                state.ship_facing()
            );
        }

        if status == TickStatus::GameOver {
            break "game over";
        }
        if ticks >= settings.max_ticks {
            break "tick cap";
        }
    };

    log::info!(
        "Session {session} ended ({outcome}): {ticks} ticks, score {}, {} lives left, {}m on the clock",
        state.score,
        state.lives,
        state.minutes,
    );
}

/// Scripted pilot: patrols the field on a slow cycle, runs from whatever
/// is closing in, and fires on a fixed cadence.
fn pilot(state: &GameState, ticks: u64) -> TickInput {
    let ship = state.ship.pos;

    let angle = ticks as f32 * 0.01;
    let patrol = Vec2::new(42.0 + 30.0 * angle.cos(), 27.0 + 12.0 * angle.sin());

    // Nearest live threat overrides the patrol.
    let mut threat: Option<Vec2> = None;
    let mut best = f32::MAX;
    for slot in &state.aliens {
        if slot.entity.visible && slot.attacking {
            let d = slot.entity.pos.distance_squared(ship);
            if d < best {
                best = d;
                threat = Some(slot.entity.pos);
            }
        }
    }
    if state.boss_missile.visible && state.boss_missile.pos.distance_squared(ship) < best {
        threat = Some(state.boss_missile.pos);
    }

    let mut input = TickInput {
        fire: ticks.is_multiple_of(8),
        ..Default::default()
    };

    match threat {
        Some(pos) if pos.distance_squared(ship) < 100.0 => {
            input.left = pos.x > ship.x;
            input.right = pos.x < ship.x;
            input.up = pos.y > ship.y;
            input.down = pos.y < ship.y;
        }
        _ => {
            input.right = patrol.x > ship.x + 1.0;
            input.left = patrol.x < ship.x - 1.0;
            input.down = patrol.y > ship.y + 1.0;
            input.up = patrol.y < ship.y - 1.0;
        }
    }

    input
}

/// Drain pending telemetry, as log lines or JSON lines on stdout.
fn report_events(state: &mut GameState, as_json: bool) {
    for event in state.events.drain(..) {
        if as_json {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(err) => log::warn!("Event serialization failed: {err}"),
            }
        } else {
            log::info!("[{:6.2}s] {}", event.at_seconds, describe(&event.kind));
        }
    }
}

fn describe(kind: &EventKind) -> String {
    match kind {
        EventKind::PlayerKilled { cause, lives_left } => {
            let killer = match cause {
                KillCause::Alien => "An alien",
                KillCause::Boss => "The mothership",
                KillCause::BossMissile => "A mothership missile",
            };
            format!("{killer} destroyed the ship ({lives_left} lives left)")
        }
        EventKind::AlienDestroyed { slot } => format!("Alien in slot {slot} destroyed"),
        EventKind::BossSpawned => "The mothership has arrived".to_string(),
        EventKind::BossPhaseChanged { phase } => format!("The mothership took a hit ({phase:?})"),
        EventKind::BossDestroyed => "The mothership has been destroyed".to_string(),
        EventKind::GameOver { score } => format!("Game over with a final score of {score}"),
    }
}
