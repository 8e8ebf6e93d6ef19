//! Egg Toss - simulation core for a 2D arcade toss-and-catch game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (launch, physics, enemy AI, scoring)
//! - `settings`: Host configuration for the runner binary
//!
//! Rendering, asset loading and raw input decoding live outside this crate.
//! The host writes a [`sim::TickInput`] each frame, calls [`sim::tick`], and
//! reads back a [`sim::Snapshot`].

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Player reflects off the side walls at x = ±ARENA_HALF_WIDTH
    pub const ARENA_HALF_WIDTH: f32 = 5.0;

    /// Enemy position clamp (hard clamp, no bounce)
    pub const ENEMY_MIN_X: f32 = -4.8;
    pub const ENEMY_MAX_X: f32 = 4.8;
    pub const ENEMY_MIN_Y: f32 = 0.3;
    pub const ENEMY_MAX_Y: f32 = 9.5;

    /// Collision radii
    pub const PLAYER_RADIUS: f32 = 0.2;
    pub const ENEMY_RADIUS: f32 = 0.2;
    pub const TARGET_RADIUS: f32 = 0.8;

    /// Launch angle limits and aim rate (degrees, degrees/sec)
    pub const MIN_ANGLE: f32 = 20.0;
    pub const MAX_ANGLE: f32 = 160.0;
    pub const NEUTRAL_ANGLE: f32 = 90.0;
    pub const AIM_RATE: f32 = 50.0;

    /// Charge power accumulation (units/sec) and cap
    pub const CHARGE_RATE: f32 = 10.0;
    pub const MAX_POWER: f32 = 10.0;

    /// Downward acceleration while flying
    pub const GRAVITY: f32 = 4.5;

    /// Target pool
    pub const TARGET_CAPACITY: usize = 10;
    pub const TARGET_POINTS: u32 = 10;
    pub const TARGET_SPAWN_X: (f32, f32) = (-4.5, 4.5);
    pub const TARGET_SPAWN_Y: (f32, f32) = (1.0, 9.0);

    /// Golden escalation and power-up
    pub const GOLDEN_THRESHOLD_START: u32 = 100;
    pub const GOLDEN_THRESHOLD_STEP: u32 = 290;
    pub const GOLDEN_DURATION_BONUS: f32 = 7.5;
    /// Extra reach added to the radius sum while golden power is active
    pub const GOLDEN_CONTACT_MARGIN: f32 = 0.3;

    /// Enemy spawning
    pub const ENEMY_START_POS: Vec2 = Vec2::new(3.0, 3.0);
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_STEP: f32 = 0.1;
    /// An enemy is added once score exceeds enemies_spawned * this
    pub const ENEMY_SCORE_STEP: u32 = 100;

    /// Steering turn rate range for Chase/Flee/Hunt (degrees/sec)
    pub const STEER_TURN_RATE: (f32, f32) = (60.0, 240.0);
    /// Wander: weak pull toward the anchor with slack in both directions
    pub const WANDER_ANCHOR: Vec2 = Vec2::new(0.0, 9.0);
    pub const WANDER_TURN_RATE: (f32, f32) = (-90.0, 150.0);
    /// Circle: constant turn rate (degrees/sec)
    pub const CIRCLE_TURN_RATE: f32 = 90.0;
    /// Patrol: seconds between 180° reversals
    pub const PATROL_FLIP_INTERVAL: f32 = 3.0;
    /// Hunt: how far ahead (seconds) to extrapolate the player
    pub const HUNT_LOOKAHEAD: f32 = 1.0;

    /// Seconds an enemy stays in a behavior before rolling a new one
    pub const STATE_DURATION: (f32, f32) = (7.0, 20.0);
    /// Transition roll range (inclusive)
    pub const STATE_ROLL_MAX: i32 = 10;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for a heading in degrees
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Heading in degrees [0, 360) pointing along `dir`
#[inline]
pub fn heading_of(dir: Vec2) -> f32 {
    normalize_degrees(dir.y.atan2(dir.x).to_degrees())
}
