//! Per-frame simulation step
//!
//! Fixed order each tick:
//! 1. launch state machine and player physics (landing triggers refills),
//! 2. golden power timer and target pickups,
//! 3. enemy behavior, steering, movement and contact.
//!
//! A fatal enemy contact resets the game and ends the tick on the spot.

use super::collision::{self, EnemyContact};
use super::enemy::{self, EnemyContext};
use super::launch::{self, LaunchOutcome};
use super::physics;
use super::random::RandomSource;
use super::spawner;
use super::state::{GameEvent, GameState, LaunchState};

/// Control signals for a single tick, already debounced by the input layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Raise the launch angle
    pub turn_left: bool,
    /// Lower the launch angle
    pub turn_right: bool,
    /// Power button is down (press starts charging, release launches)
    pub hold_power: bool,
}

/// Advance the game by `dt` seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    let dt = dt.max(0.0);
    state.events.clear();
    state.ticks += 1;
    state.time += dt;

    // Launch and player physics
    match launch::step_launch(&mut state.launch, &mut state.player, input, dt) {
        LaunchOutcome::Launched(velocity) => {
            state.events.push(GameEvent::Launched { velocity });
        }
        LaunchOutcome::Landed => {
            state.events.push(GameEvent::Landed);
            spawner::refill_targets(state);
            spawner::escalate_enemies(state);
        }
        LaunchOutcome::None => {}
    }
    physics::reflect_off_walls(&mut state.player);

    // Targets
    collision::tick_golden_power(state, dt);
    collision::collect_targets(state);

    // Enemies
    update_enemies(state, dt);
}

/// Steer, move and resolve contact for every enemy in order.
///
/// Eaten enemies drop out of the list mid-pass; a fatal contact resets the game
/// and skips the remaining enemies.
fn update_enemies<R: RandomSource>(state: &mut GameState<R>, dt: f32) {
    let golden_active = state.golden_active();
    let ctx = EnemyContext {
        player_pos: state.player.pos,
        player_vel: state.player.vel,
        player_flying: state.launch.state == LaunchState::Flying,
        golden_active,
    };

    let mut i = 0;
    while i < state.enemies.len() {
        let changed = enemy::update_enemy(&mut state.enemies[i], &ctx, &mut state.rng, dt);
        if let Some(behavior) = changed {
            log::debug!("Enemy {} -> {}", i, behavior.name());
            state
                .events
                .push(GameEvent::EnemyStateChanged { index: i, behavior });
        }

        match collision::enemy_contact(&state.player, &state.enemies[i], golden_active) {
            EnemyContact::None => i += 1,
            EnemyContact::Eaten => collision::eat_enemy(state, i),
            EnemyContact::Fatal => {
                collision::kill_player(state);
                return;
            }
        }
    }
}
