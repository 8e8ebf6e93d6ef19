//! Game state and core simulation types
//!
//! Everything the per-frame update mutates lives in [`GameState`]. The random
//! source is owned by the state so a whole run is reproducible from its seed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::{RandomSource, SimRng};
use super::spawner;
use crate::consts::*;

/// Player launch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaunchState {
    /// Standing on the ground, turn signals move the aim
    #[default]
    Aiming,
    /// Power button held, power builds up (aim stays live)
    Charging,
    /// In the air until y returns to 0
    Flying,
}

/// Launch phase plus aim and power
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub state: LaunchState,
    /// Launch angle in degrees, always within [MIN_ANGLE, MAX_ANGLE]
    pub angle: f32,
    /// Charge power, always within [0, MAX_POWER]
    pub power: f32,
    /// Hold-power signal seen last frame (for press/release edges)
    #[serde(skip)]
    pub power_held: bool,
}

impl Default for Launch {
    fn default() -> Self {
        Self {
            state: LaunchState::Aiming,
            angle: NEUTRAL_ANGLE,
            power: 0.0,
            power_held: false,
        }
    }
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
        }
    }
}

/// Enemy behavior. Only Patrol carries extra state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    /// Steer toward the player
    Chase,
    /// Steer away from the player
    Flee,
    /// Hold heading, reverse every PATROL_FLIP_INTERVAL seconds
    Patrol { time_traveled: f32 },
    /// Drift loosely toward the top-center anchor
    Wander,
    /// Turn at a constant rate
    Circle,
    /// Steer toward where the player will be
    Hunt,
}

impl EnemyBehavior {
    /// Map a transition roll in [0, STATE_ROLL_MAX] to a behavior
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=2 => EnemyBehavior::Chase,
            3 => EnemyBehavior::Flee,
            4..=6 => EnemyBehavior::Patrol { time_traveled: 0.0 },
            7..=8 => EnemyBehavior::Wander,
            9 => EnemyBehavior::Circle,
            _ => EnemyBehavior::Hunt,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnemyBehavior::Chase => "chase",
            EnemyBehavior::Flee => "flee",
            EnemyBehavior::Patrol { .. } => "patrol",
            EnemyBehavior::Wander => "wander",
            EnemyBehavior::Circle => "circle",
            EnemyBehavior::Hunt => "hunt",
        }
    }

    /// Behaviors that pick a fresh random heading when entered
    pub fn randomizes_heading(&self) -> bool {
        matches!(
            self,
            EnemyBehavior::Patrol { .. } | EnemyBehavior::Wander | EnemyBehavior::Circle
        )
    }
}

/// A roaming enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// Heading in degrees [0, 360)
    pub heading: f32,
    pub behavior: EnemyBehavior,
    /// Seconds spent in the current behavior
    pub state_time: f32,
    /// Seconds to stay in the current behavior before rolling again
    pub target_time: f32,
}

impl Enemy {
    /// New enemy in Chase with a freshly drawn state duration
    pub fn new(pos: Vec2, speed: f32, rng: &mut impl RandomSource) -> Self {
        Self {
            pos,
            speed,
            radius: ENEMY_RADIUS,
            heading: 0.0,
            behavior: EnemyBehavior::Chase,
            state_time: 0.0,
            target_time: rng.uniform(STATE_DURATION.0, STATE_DURATION.1),
        }
    }
}

/// A collectible egg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
    pub points: u32,
    /// Golden eggs grant golden power when collected
    pub golden: bool,
}

/// Pickup tallies shown on the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupCounters {
    pub plain: u32,
    pub golden: u32,
}

/// Things that happened during a tick, for audio/HUD collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { velocity: Vec2 },
    Landed,
    TargetCollected { golden: bool, points: u32 },
    GoldenPowerStarted,
    GoldenPowerEnded,
    GoldenTargetSpawned { next_threshold: u32 },
    EnemySpawned { index: usize },
    EnemyEaten { index: usize },
    EnemyStateChanged { index: usize, behavior: EnemyBehavior },
    PlayerKilled,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R = SimRng> {
    /// Random source for spawns and AI rolls
    pub rng: R,
    /// Seconds since the last reset
    pub time: f32,
    /// Ticks since the last reset
    pub ticks: u64,
    pub launch: Launch,
    pub player: Player,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Target pool, at most TARGET_CAPACITY
    pub targets: Vec<Target>,
    pub score: u32,
    /// Next score that promotes a golden target
    pub golden_threshold: u32,
    /// Seconds of golden power left
    pub golden_remaining: f32,
    pub counters: PickupCounters,
    /// Enemies spawned since the last reset (drives escalation)
    pub enemies_spawned: u32,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState<SimRng> {
    /// Create a new game seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SimRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            rng,
            time: 0.0,
            ticks: 0,
            launch: Launch::default(),
            player: Player::default(),
            enemies: Vec::new(),
            targets: Vec::new(),
            score: 0,
            golden_threshold: GOLDEN_THRESHOLD_START,
            golden_remaining: 0.0,
            counters: PickupCounters::default(),
            enemies_spawned: 0,
            events: Vec::new(),
        };
        state.populate();
        state
    }

    /// Golden power is on exactly while time remains
    #[inline]
    pub fn golden_active(&self) -> bool {
        self.golden_remaining > 0.0
    }

    /// Restore start-of-game values. The random source keeps its position.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.ticks = 0;
        self.launch = Launch::default();
        self.player = Player::default();
        self.enemies.clear();
        self.targets.clear();
        self.score = 0;
        self.golden_threshold = GOLDEN_THRESHOLD_START;
        self.golden_remaining = 0.0;
        self.counters = PickupCounters::default();
        self.enemies_spawned = 0;
        self.events.clear();
        self.populate();
    }

    /// Starting enemy and a full target pool
    fn populate(&mut self) {
        let enemy = Enemy::new(ENEMY_START_POS, ENEMY_BASE_SPEED, &mut self.rng);
        self.enemies.push(enemy);
        self.enemies_spawned = 1;
        spawner::refill_targets(self);
    }
}
