//! Target pool refills and enemy escalation
//!
//! Both run when the player lands (and once at game start for the pool).

use glam::Vec2;

use super::random::RandomSource;
use super::state::{Enemy, GameEvent, GameState, Target};
use crate::consts::*;

/// Create a target at a random spot in the spawn area
pub fn spawn_target(rng: &mut impl RandomSource, golden: bool) -> Target {
    let x = rng.uniform(TARGET_SPAWN_X.0, TARGET_SPAWN_X.1);
    let y = rng.uniform(TARGET_SPAWN_Y.0, TARGET_SPAWN_Y.1);
    Target {
        pos: Vec2::new(x, y),
        radius: TARGET_RADIUS,
        points: TARGET_POINTS,
        golden,
    }
}

/// Top the target pool back up to capacity.
///
/// Each new target is golden if the score has passed the golden threshold;
/// every golden spawn raises the threshold by GOLDEN_THRESHOLD_STEP.
pub fn refill_targets<R: RandomSource>(state: &mut GameState<R>) {
    while state.targets.len() < TARGET_CAPACITY {
        let golden = state.score > state.golden_threshold;
        if golden {
            state.golden_threshold += GOLDEN_THRESHOLD_STEP;
            log::info!(
                "Golden egg spawned at score {}, next threshold {}",
                state.score,
                state.golden_threshold
            );
            state.events.push(GameEvent::GoldenTargetSpawned {
                next_threshold: state.golden_threshold,
            });
        }
        let target = spawn_target(&mut state.rng, golden);
        state.targets.push(target);
    }
}

/// Add one enemy if the score has passed `enemies_spawned * ENEMY_SCORE_STEP`.
///
/// The newcomer appears on top of the most recent enemy (or the start
/// position when none are left) and is a little faster than the last.
/// Returns true if an enemy was added.
pub fn escalate_enemies<R: RandomSource>(state: &mut GameState<R>) -> bool {
    if state.score <= state.enemies_spawned * ENEMY_SCORE_STEP {
        return false;
    }

    let pos = state
        .enemies
        .last()
        .map(|e| e.pos)
        .unwrap_or(ENEMY_START_POS);
    let speed = ENEMY_BASE_SPEED + ENEMY_SPEED_STEP * state.enemies_spawned as f32;
    let enemy = Enemy::new(pos, speed, &mut state.rng);
    state.enemies.push(enemy);
    state.enemies_spawned += 1;

    let index = state.enemies.len() - 1;
    log::info!(
        "Enemy #{} spawned at ({:.2}, {:.2}) speed {:.2} (score {})",
        state.enemies_spawned,
        pos.x,
        pos.y,
        speed,
        state.score
    );
    state.events.push(GameEvent::EnemySpawned { index });
    true
}
