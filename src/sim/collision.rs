//! Collision detection and scoring
//!
//! Target pickups, the golden power timer, and player-enemy contact.

use super::geometry::circles_overlap;
use super::random::RandomSource;
use super::state::{Enemy, GameEvent, GameState, Player};
use crate::consts::*;

/// Result of touching an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// Not touching
    None,
    /// Golden power was on: the enemy gets eaten
    Eaten,
    /// Golden power was off: the game resets
    Fatal,
}

/// Count down golden power. Emits GoldenPowerEnded when it runs out.
pub fn tick_golden_power<R: RandomSource>(state: &mut GameState<R>, dt: f32) {
    if !state.golden_active() {
        return;
    }
    state.golden_remaining = (state.golden_remaining - dt).max(0.0);
    if !state.golden_active() {
        log::info!("Golden power ended");
        state.events.push(GameEvent::GoldenPowerEnded);
    }
}

/// Pick up every target the player overlaps.
///
/// Runs in every launch state. Each pickup adds its points and leaves the pool;
/// golden pickups also extend golden power.
pub fn collect_targets<R: RandomSource>(state: &mut GameState<R>) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    let mut i = 0;
    while i < state.targets.len() {
        let target = &state.targets[i];
        if !circles_overlap(target.pos, player_pos, target.radius + player_radius) {
            i += 1;
            continue;
        }

        let target = state.targets.remove(i);
        state.score += target.points;
        state.events.push(GameEvent::TargetCollected {
            golden: target.golden,
            points: target.points,
        });

        if target.golden {
            let was_active = state.golden_active();
            state.golden_remaining += GOLDEN_DURATION_BONUS;
            state.counters.golden += 1;
            if !was_active {
                state.events.push(GameEvent::GoldenPowerStarted);
            }
            log::info!(
                "Golden egg collected, golden power {:.1}s (score {})",
                state.golden_remaining,
                state.score
            );
        } else {
            state.counters.plain += 1;
            log::debug!("Egg collected (score {})", state.score);
        }
    }
}

/// Check player-enemy contact. Golden power widens the reach.
pub fn enemy_contact(player: &Player, enemy: &Enemy, golden_active: bool) -> EnemyContact {
    let mut reach = player.radius + enemy.radius;
    if golden_active {
        reach += GOLDEN_CONTACT_MARGIN;
    }
    if !circles_overlap(player.pos, enemy.pos, reach) {
        return EnemyContact::None;
    }
    if golden_active {
        EnemyContact::Eaten
    } else {
        EnemyContact::Fatal
    }
}

/// Remove an eaten enemy. Score and launch state are untouched.
pub fn eat_enemy<R: RandomSource>(state: &mut GameState<R>, index: usize) {
    state.enemies.remove(index);
    log::info!("Enemy eaten, {} left", state.enemies.len());
    state.events.push(GameEvent::EnemyEaten { index });
}

/// Fatal contact: reset the whole game
pub fn kill_player<R: RandomSource>(state: &mut GameState<R>) {
    log::info!(
        "Player caught at score {} after {:.1}s, resetting",
        state.score,
        state.time
    );
    state.reset();
    state.events.push(GameEvent::PlayerKilled);
}
