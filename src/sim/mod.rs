//! Simulation module
//!
//! All gameplay logic lives here. The update is single-threaded and runs to
//! completion each frame:
//! - Randomness only through an injectable [`RandomSource`]
//! - Stable iteration order (spawn order for enemies and targets)
//! - No rendering or input-device dependencies

pub mod collision;
pub mod enemy;
pub mod geometry;
pub mod launch;
pub mod physics;
pub mod random;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::EnemyContact;
pub use geometry::{circles_overlap, mag};
pub use launch::LaunchOutcome;
pub use random::{RandomSource, SequenceRandom, SimRng};
pub use snapshot::{EnemyView, LaunchView, PlayerView, Snapshot, TargetView};
pub use state::{
    Enemy, EnemyBehavior, GameEvent, GameState, Launch, LaunchState, PickupCounters, Player,
    Target,
};
pub use tick::{TickInput, tick};
