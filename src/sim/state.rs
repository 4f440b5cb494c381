//! Game state: entities, session counters, telemetry events, and the
//! per-tick render snapshot.

use glam::{IVec2, UVec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::entity::{Appearance, BossPhase, Direction, Entity};
use crate::sim::spawn;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Terminal for the session; only a reset leaves it
    GameOver,
}

/// One alien slot: the sprite plus its pursuit flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlienSlot {
    pub entity: Entity,
    /// Seeking the player right now (visible-but-idle is valid).
    pub attacking: bool,
}

/// One player missile slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileSlot {
    pub entity: Entity,
    /// Set when fired; the ship facing is applied on the next tick.
    pub needs_direction: bool,
}

/// The mothership and its fight state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub entity: Entity,
    /// Remaining health in `0..=10`.
    pub health: u32,
    /// Mid pursuit pass.
    pub attacking: bool,
}

/// Cause carried by a player-killed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    Alien,
    Boss,
    BossMissile,
}

/// What happened, for telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    PlayerKilled { cause: KillCause, lives_left: u32 },
    AlienDestroyed { slot: usize },
    BossSpawned,
    BossPhaseChanged { phase: BossPhase },
    BossDestroyed,
    GameOver { score: u32 },
}

/// A timestamped telemetry event, drained by the host after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Session time when the event fired, in seconds.
    pub at_seconds: f64,
    pub kind: EventKind,
}

impl GameEvent {
    pub fn new(at_seconds: f64, kind: EventKind) -> Self {
        Self { at_seconds, kind }
    }
}

/// One renderable sprite in a frame snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Rounded display cell.
    pub pos: IVec2,
    pub size: UVec2,
    pub appearance: Appearance,
    pub visible: bool,
}

impl Sprite {
    fn of(entity: &Entity) -> Self {
        Self {
            pos: entity.grid_pos(),
            size: entity.size(),
            appearance: entity.appearance,
            visible: entity.visible,
        }
    }
}

/// HUD fields for the status strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub lives: u32,
    pub score: u32,
    pub minutes: u32,
    /// Seconds within the current minute.
    pub seconds: u32,
}

/// Per-tick render snapshot: sprites in stable draw order plus the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Ship, aliens 0..5, missiles 0..5, mothership, mothership missile.
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Player lives; the terminal hit happens at 1 and leaves it there
    pub lives: u32,
    /// Score
    pub score: u32,
    /// Aliens still alive in the current wave
    pub alive_alien_count: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Full minutes shown on the HUD clock
    pub minutes: u32,
    /// Elapsed-seconds reading when the current minute started
    pub minute_epoch: f64,
    /// Player ship; facing lives in its appearance tag
    pub ship: Entity,
    /// Alien wave
    pub aliens: [AlienSlot; consts::ALIEN_SLOTS],
    /// Player missile pool
    pub missiles: [MissileSlot; consts::MISSILE_SLOTS],
    /// Mothership slot, in play only while `boss_active`
    pub boss: Boss,
    /// Whether the mothership is in play
    pub boss_active: bool,
    /// Mothership missile
    pub boss_missile: Entity,
    /// Telemetry events pending host drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session: full lives, zero score, new placements.
    pub fn new(rng: &mut impl Rng) -> Self {
        let ship = Entity::new(
            spawn::ship_position(rng, &[]),
            consts::SHIP_SIZE,
            Appearance::Ship(Direction::Up),
        );
        let aliens = fresh_alien_wave(rng, ship.grid_pos());
        let launch = ship.center();
        let missiles = std::array::from_fn(|_| MissileSlot {
            entity: Entity::hidden(launch, consts::MISSILE_SIZE, Appearance::Missile),
            needs_direction: false,
        });

        Self {
            phase: GamePhase::Playing,
            lives: consts::STARTING_LIVES,
            score: 0,
            alive_alien_count: consts::ALIEN_SLOTS as u32,
            time_ticks: 0,
            minutes: 0,
            minute_epoch: 0.0,
            ship,
            aliens,
            missiles,
            boss: Boss {
                entity: Entity::hidden(
                    consts::OFF_FIELD,
                    consts::BOSS_SIZE,
                    Appearance::Boss(BossPhase::Full),
                ),
                health: consts::BOSS_MAX_HEALTH,
                attacking: false,
            },
            boss_active: false,
            boss_missile: Entity::hidden(
                consts::OFF_FIELD,
                consts::BOSS_MISSILE_SIZE,
                Appearance::BossMissile,
            ),
            events: Vec::new(),
        }
    }

    /// Restart entry point: reinitialize everything for a new session.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Self::new(rng);
    }

    /// Ship facing, read from its appearance tag.
    pub fn ship_facing(&self) -> Direction {
        match self.ship.appearance {
            Appearance::Ship(dir) => dir,
            _ => Direction::Up,
        }
    }

    /// Bring the mothership into play: fresh health, new placement away
    /// from the ship.
    pub fn spawn_boss(&mut self, rng: &mut impl Rng, now: f64) {
        let pos = spawn::boss_position(rng, &[self.ship.grid_pos()]);
        self.boss.entity = Entity::new(pos, consts::BOSS_SIZE, Appearance::Boss(BossPhase::Full));
        self.boss.health = consts::BOSS_MAX_HEALTH;
        self.boss.attacking = false;
        self.boss_active = true;
        self.events.push(GameEvent::new(now, EventKind::BossSpawned));
        log::info!("Mothership inbound at {pos}");
    }

    /// Repopulate the wave after a mothership kill.
    pub fn respawn_alien_wave(&mut self, rng: &mut impl Rng) {
        self.aliens = fresh_alien_wave(rng, self.ship.grid_pos());
        self.alive_alien_count = consts::ALIEN_SLOTS as u32;
        log::info!("Alien wave respawned");
    }

    /// Grid cells of every visible alien; ship respawns must avoid them.
    pub fn visible_alien_cells(&self) -> Vec<IVec2> {
        self.aliens
            .iter()
            .filter(|slot| slot.entity.visible)
            .map(|slot| slot.entity.grid_pos())
            .collect()
    }

    /// Render snapshot for the current tick.
    pub fn frame(&self, elapsed_seconds: f64) -> Frame {
        let mut sprites =
            Vec::with_capacity(3 + consts::ALIEN_SLOTS + consts::MISSILE_SLOTS);
        sprites.push(Sprite::of(&self.ship));
        for slot in &self.aliens {
            sprites.push(Sprite::of(&slot.entity));
        }
        for slot in &self.missiles {
            sprites.push(Sprite::of(&slot.entity));
        }
        sprites.push(Sprite::of(&self.boss.entity));
        sprites.push(Sprite::of(&self.boss_missile));

        let seconds = (elapsed_seconds - self.minute_epoch).max(0.0) as u32;
        Frame {
            sprites,
            hud: Hud {
                lives: self.lives,
                score: self.score,
                minutes: self.minutes,
                seconds,
            },
        }
    }
}

/// Place a full wave, avoiding the ship and each other.
fn fresh_alien_wave(
    rng: &mut impl Rng,
    ship_cell: IVec2,
) -> [AlienSlot; consts::ALIEN_SLOTS] {
    let mut taken = vec![ship_cell];
    std::array::from_fn(|_| {
        let pos = spawn::alien_position(rng, &taken);
        taken.push(pos.as_ivec2());
        AlienSlot {
            entity: Entity::new(pos, consts::ALIEN_SIZE, Appearance::Alien),
            attacking: false,
        }
    })
}
