//! Enemy behavior state machine
//!
//! Each tick an enemy:
//! 1. updates its behavior (golden override, or a timed random roll),
//! 2. turns its heading according to that behavior,
//! 3. moves forward along the heading and is clamped to the arena.
//!
//! Steering only rotates the heading, so approaches curve rather than
//! following straight lines.

use glam::Vec2;

use super::random::RandomSource;
use super::state::{Enemy, EnemyBehavior};
use crate::consts::*;
use crate::{heading_of, heading_vector, normalize_degrees};

/// What an enemy knows about the world this tick
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub player_pos: Vec2,
    pub player_vel: Vec2,
    /// Player is airborne; behavior rolls are held off
    pub player_flying: bool,
    /// Golden power forces every enemy to flee
    pub golden_active: bool,
}

/// Run one tick for an enemy. Returns the new behavior if it changed.
pub fn update_enemy(
    enemy: &mut Enemy,
    ctx: &EnemyContext,
    rng: &mut impl RandomSource,
    dt: f32,
) -> Option<EnemyBehavior> {
    let changed = update_behavior(enemy, ctx, rng, dt);
    steer(enemy, ctx, rng, dt);
    advance(enemy, dt);
    changed
}

/// Advance the behavior timer and switch behavior when due.
///
/// While golden power is active the enemy is pinned to Flee every tick and no
/// roll happens. Otherwise, once the time in the current behavior passes its
/// drawn duration and the player is on the ground, a new behavior is rolled.
pub fn update_behavior(
    enemy: &mut Enemy,
    ctx: &EnemyContext,
    rng: &mut impl RandomSource,
    dt: f32,
) -> Option<EnemyBehavior> {
    enemy.state_time += dt;

    if ctx.golden_active {
        if enemy.behavior == EnemyBehavior::Flee {
            return None;
        }
        enemy.behavior = EnemyBehavior::Flee;
        return Some(enemy.behavior);
    }

    if enemy.state_time > enemy.target_time && !ctx.player_flying {
        let previous = enemy.behavior.name();
        let roll = rng.uniform_int(0, STATE_ROLL_MAX);
        enter_behavior(enemy, EnemyBehavior::from_roll(roll), rng);
        // Rolling the same behavior only restarts its timer
        if enemy.behavior.name() != previous {
            return Some(enemy.behavior);
        }
    }

    None
}

/// Switch to `behavior`, restarting the timer with a fresh duration
pub fn enter_behavior(enemy: &mut Enemy, behavior: EnemyBehavior, rng: &mut impl RandomSource) {
    enemy.behavior = behavior;
    if behavior.randomizes_heading() {
        enemy.heading = normalize_degrees(rng.uniform(0.0, 360.0));
    }
    enemy.state_time = 0.0;
    enemy.target_time = rng.uniform(STATE_DURATION.0, STATE_DURATION.1);
}

/// Turn the heading for this tick according to the current behavior
pub fn steer(enemy: &mut Enemy, ctx: &EnemyContext, rng: &mut impl RandomSource, dt: f32) {
    let pos = enemy.pos;
    match &mut enemy.behavior {
        EnemyBehavior::Chase => {
            let desired = heading_of(ctx.player_pos - pos);
            let turn = rng.uniform(STEER_TURN_RATE.0, STEER_TURN_RATE.1) * dt;
            enemy.heading = turn_toward(enemy.heading, desired, turn);
        }
        EnemyBehavior::Flee => {
            let desired = heading_of(pos - ctx.player_pos);
            let turn = rng.uniform(STEER_TURN_RATE.0, STEER_TURN_RATE.1) * dt;
            enemy.heading = turn_toward(enemy.heading, desired, turn);
        }
        EnemyBehavior::Hunt => {
            let predicted = ctx.player_pos + ctx.player_vel * HUNT_LOOKAHEAD;
            let desired = heading_of(predicted - pos);
            let turn = rng.uniform(STEER_TURN_RATE.0, STEER_TURN_RATE.1) * dt;
            enemy.heading = turn_toward(enemy.heading, desired, turn);
        }
        EnemyBehavior::Wander => {
            let desired = heading_of(WANDER_ANCHOR - pos);
            let turn = rng.uniform(WANDER_TURN_RATE.0, WANDER_TURN_RATE.1) * dt;
            enemy.heading = turn_toward(enemy.heading, desired, turn);
        }
        EnemyBehavior::Circle => {
            enemy.heading = normalize_degrees(enemy.heading + CIRCLE_TURN_RATE * dt);
        }
        EnemyBehavior::Patrol { time_traveled } => {
            *time_traveled += dt;
            if *time_traveled >= PATROL_FLIP_INTERVAL {
                *time_traveled -= PATROL_FLIP_INTERVAL;
                enemy.heading = normalize_degrees(enemy.heading + 180.0);
            }
        }
    }
}

/// Rotate `heading` by `amount` degrees in the short direction of `desired`.
///
/// A negative `amount` turns away instead. The result is in [0, 360).
pub fn turn_toward(heading: f32, desired: f32, amount: f32) -> f32 {
    let diff = normalize_degrees(desired - heading);
    if diff == 0.0 {
        return normalize_degrees(heading);
    }
    let side = if diff < 180.0 { 1.0 } else { -1.0 };
    normalize_degrees(heading + side * amount)
}

/// Move along the heading at the enemy's speed, then clamp into the arena
pub fn advance(enemy: &mut Enemy, dt: f32) {
    enemy.pos += heading_vector(enemy.heading) * enemy.speed * dt;
    enemy.pos.x = enemy.pos.x.clamp(ENEMY_MIN_X, ENEMY_MAX_X);
    enemy.pos.y = enemy.pos.y.clamp(ENEMY_MIN_Y, ENEMY_MAX_Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SequenceRandom;
    use proptest::prelude::*;

    fn make_enemy(behavior: EnemyBehavior, heading: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(0.0, 5.0),
            speed: 1.0,
            radius: ENEMY_RADIUS,
            heading,
            behavior,
            state_time: 0.0,
            target_time: 10.0,
        }
    }

    fn ground_ctx(player_pos: Vec2) -> EnemyContext {
        EnemyContext {
            player_pos,
            player_vel: Vec2::ZERO,
            player_flying: false,
            golden_active: false,
        }
    }

    fn heading_gap(a: f32, b: f32) -> f32 {
        let d = normalize_degrees(a - b);
        d.min(360.0 - d)
    }

    #[test]
    fn test_turn_toward_short_way() {
        // Target 30° counter-clockwise: turn up
        assert!((turn_toward(0.0, 30.0, 10.0) - 10.0).abs() < 1e-4);
        // Target 30° clockwise: turn down, wrapping below zero
        assert!((turn_toward(0.0, 330.0, 10.0) - 350.0).abs() < 1e-4);
        // Already aligned
        assert_eq!(turn_toward(90.0, 90.0, 10.0), 90.0);
    }

    #[test]
    fn test_chase_turns_toward_player() {
        let mut rng = SequenceRandom::midpoint();
        // Player straight to the right (0°), enemy heading up (90°)
        let mut enemy = make_enemy(EnemyBehavior::Chase, 90.0);
        let ctx = ground_ctx(Vec2::new(4.0, 5.0));
        let before = heading_gap(enemy.heading, 0.0);
        steer(&mut enemy, &ctx, &mut rng, 0.1);
        let after = heading_gap(enemy.heading, 0.0);
        assert!(after < before);
        // Midpoint turn rate 150°/s over 0.1s
        assert!((enemy.heading - 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_flee_turns_away_from_player() {
        let mut rng = SequenceRandom::midpoint();
        // Player to the right, so fleeing means heading toward 180°
        let mut enemy = make_enemy(EnemyBehavior::Flee, 90.0);
        let ctx = ground_ctx(Vec2::new(4.0, 5.0));
        steer(&mut enemy, &ctx, &mut rng, 0.1);
        assert!((enemy.heading - 105.0).abs() < 1e-3);
    }

    #[test]
    fn test_hunt_leads_the_player() {
        let mut rng = SequenceRandom::midpoint();
        // Player at (1, 5) directly right but moving up fast: predicted point
        // is above the enemy, so Hunt turns counter-clockwise from 0°
        let mut enemy = make_enemy(EnemyBehavior::Hunt, 0.0);
        let ctx = EnemyContext {
            player_pos: Vec2::new(1.0, 5.0),
            player_vel: Vec2::new(0.0, 4.0),
            player_flying: true,
            golden_active: false,
        };
        steer(&mut enemy, &ctx, &mut rng, 0.1);
        assert!(enemy.heading > 0.0 && enemy.heading < 90.0);

        // Chase with the same context would see the player dead ahead
        let mut chaser = make_enemy(EnemyBehavior::Chase, 0.0);
        steer(&mut chaser, &ctx, &mut rng, 0.1);
        assert_eq!(chaser.heading, 0.0);
    }

    #[test]
    fn test_wander_heads_for_anchor() {
        // Fraction 1.0 picks the strongest pull toward the anchor
        let mut rng = SequenceRandom::new(vec![1.0]);
        let mut enemy = make_enemy(EnemyBehavior::Wander, 0.0);
        enemy.pos = Vec2::new(0.0, 2.0);
        steer(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        // Anchor is straight up (90°): turn counter-clockwise by 15°
        assert!((enemy.heading - WANDER_TURN_RATE.1 * 0.1).abs() < 1e-3);

        // Fraction 0.0 is the slack end: drifts the other way
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut enemy = make_enemy(EnemyBehavior::Wander, 0.0);
        enemy.pos = Vec2::new(0.0, 2.0);
        steer(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        assert!((enemy.heading - 351.0).abs() < 1e-3);
    }

    #[test]
    fn test_patrol_reverses_every_interval() {
        let mut rng = SequenceRandom::midpoint();
        let mut enemy = make_enemy(EnemyBehavior::Patrol { time_traveled: 0.0 }, 30.0);
        let ctx = ground_ctx(Vec2::ZERO);
        steer(&mut enemy, &ctx, &mut rng, 2.0);
        assert_eq!(enemy.heading, 30.0);
        steer(&mut enemy, &ctx, &mut rng, 1.5);
        assert!((enemy.heading - 210.0).abs() < 1e-4);
        let EnemyBehavior::Patrol { time_traveled } = enemy.behavior else {
            panic!("left patrol");
        };
        assert!((time_traveled - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_circle_turns_at_fixed_rate() {
        let mut rng = SequenceRandom::midpoint();
        let mut enemy = make_enemy(EnemyBehavior::Circle, 350.0);
        steer(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.5);
        assert!((enemy.heading - 35.0).abs() < 1e-3);
    }

    #[test]
    fn test_moves_along_heading() {
        let mut enemy = make_enemy(EnemyBehavior::Circle, 90.0);
        enemy.speed = 2.0;
        advance(&mut enemy, 0.5);
        assert!(enemy.pos.x.abs() < 1e-5);
        assert!((enemy.pos.y - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_does_not_touch_heading() {
        let mut enemy = make_enemy(EnemyBehavior::Chase, 0.0);
        enemy.pos = Vec2::new(4.7, 9.4);
        enemy.heading = 45.0;
        enemy.speed = 5.0;
        advance(&mut enemy, 1.0);
        assert_eq!(enemy.pos, Vec2::new(ENEMY_MAX_X, ENEMY_MAX_Y));
        assert_eq!(enemy.heading, 45.0);
        assert_eq!(enemy.speed, 5.0);
    }

    #[test]
    fn test_roll_after_duration_enters_new_behavior() {
        // Draw order: roll, heading, duration
        // Roll fraction 0.5 -> 5 (Patrol), heading 0.25 -> 90°, duration 0.0 -> 7s
        let mut rng = SequenceRandom::new(vec![0.5, 0.25, 0.0]);
        let mut enemy = make_enemy(EnemyBehavior::Chase, 10.0);
        enemy.state_time = 9.95;
        let changed = update_behavior(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        assert_eq!(changed, Some(EnemyBehavior::Patrol { time_traveled: 0.0 }));
        assert!((enemy.heading - 90.0).abs() < 1e-4);
        assert_eq!(enemy.state_time, 0.0);
        assert_eq!(enemy.target_time, STATE_DURATION.0);
    }

    #[test]
    fn test_roll_keeps_heading_for_chase() {
        // Roll fraction 0.0 -> 0 (Chase), then duration
        let mut rng = SequenceRandom::new(vec![0.0, 1.0]);
        let mut enemy = make_enemy(EnemyBehavior::Hunt, 123.0);
        enemy.state_time = 11.0;
        let changed = update_behavior(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        assert_eq!(changed, Some(EnemyBehavior::Chase));
        assert_eq!(enemy.heading, 123.0);
        assert_eq!(enemy.target_time, STATE_DURATION.1);
    }

    #[test]
    fn test_roll_enters_wander_with_new_heading() {
        // Roll fraction 0.75 -> 8 (Wander), heading 0.5 -> 180°
        let mut rng = SequenceRandom::new(vec![0.75, 0.5, 0.0]);
        let mut enemy = make_enemy(EnemyBehavior::Chase, 10.0);
        enemy.state_time = 11.0;
        let changed = update_behavior(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        assert_eq!(changed, Some(EnemyBehavior::Wander));
        assert!((enemy.heading - 180.0).abs() < 1e-4);
        assert_eq!(enemy.target_time, STATE_DURATION.0);
    }

    #[test]
    fn test_roll_enters_circle_with_new_heading() {
        // Roll fraction 0.9 -> 9 (Circle), heading 0.25 -> 90°
        let mut rng = SequenceRandom::new(vec![0.9, 0.25, 1.0]);
        let mut enemy = make_enemy(EnemyBehavior::Flee, 300.0);
        enemy.state_time = 11.0;
        let changed = update_behavior(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        assert_eq!(changed, Some(EnemyBehavior::Circle));
        assert!((enemy.heading - 90.0).abs() < 1e-4);
        assert_eq!(enemy.target_time, STATE_DURATION.1);
    }

    #[test]
    fn test_same_behavior_roll_only_restarts_timer() {
        // Roll fraction 0.0 -> 0 (Chase) while already chasing
        let mut rng = SequenceRandom::new(vec![0.0, 1.0]);
        let mut enemy = make_enemy(EnemyBehavior::Chase, 45.0);
        enemy.state_time = 11.0;
        let changed = update_behavior(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        assert_eq!(changed, None);
        assert_eq!(enemy.behavior, EnemyBehavior::Chase);
        assert_eq!(enemy.heading, 45.0);
        assert_eq!(enemy.state_time, 0.0);
        assert_eq!(enemy.target_time, STATE_DURATION.1);
    }

    #[test]
    fn test_no_roll_while_player_flying() {
        let mut rng = SequenceRandom::midpoint();
        let mut enemy = make_enemy(EnemyBehavior::Hunt, 0.0);
        enemy.state_time = 50.0;
        let ctx = EnemyContext {
            player_flying: true,
            ..ground_ctx(Vec2::ZERO)
        };
        assert_eq!(update_behavior(&mut enemy, &ctx, &mut rng, 0.1), None);
        assert_eq!(enemy.behavior, EnemyBehavior::Hunt);
    }

    #[test]
    fn test_golden_forces_flee_every_tick() {
        let mut rng = SequenceRandom::midpoint();
        let mut enemy = make_enemy(EnemyBehavior::Circle, 0.0);
        enemy.state_time = 50.0;
        let ctx = EnemyContext {
            golden_active: true,
            ..ground_ctx(Vec2::ZERO)
        };
        assert_eq!(
            update_behavior(&mut enemy, &ctx, &mut rng, 0.1),
            Some(EnemyBehavior::Flee)
        );
        // Already fleeing: stays put, no roll despite the expired timer
        assert_eq!(update_behavior(&mut enemy, &ctx, &mut rng, 0.1), None);
        assert_eq!(enemy.behavior, EnemyBehavior::Flee);

        // Golden lapses: the overdue roll happens
        let changed = update_behavior(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, 0.1);
        assert!(changed.is_some());
        assert_eq!(enemy.state_time, 0.0);
    }

    proptest! {
        #[test]
        fn prop_enemy_stays_clamped(
            x in -20.0f32..20.0,
            y in -20.0f32..20.0,
            heading in 0.0f32..360.0,
            speed in 0.0f32..50.0,
            dt in 0.0f32..1.0,
        ) {
            let mut enemy = make_enemy(EnemyBehavior::Chase, heading);
            enemy.pos = Vec2::new(x, y);
            enemy.speed = speed;
            let mut rng = SequenceRandom::new(vec![0.3, 0.9, 0.1]);
            update_enemy(&mut enemy, &ground_ctx(Vec2::new(1.0, 1.0)), &mut rng, dt);
            prop_assert!(enemy.pos.x >= ENEMY_MIN_X && enemy.pos.x <= ENEMY_MAX_X);
            prop_assert!(enemy.pos.y >= ENEMY_MIN_Y && enemy.pos.y <= ENEMY_MAX_Y);
            prop_assert!(enemy.heading >= 0.0 && enemy.heading < 360.0);
        }

        #[test]
        fn prop_circle_heading_law(start in 0.0f32..360.0, t in 0.0f32..5.0) {
            let mut rng = SequenceRandom::midpoint();
            let mut enemy = make_enemy(EnemyBehavior::Circle, start);
            enemy.target_time = 20.0;
            update_enemy(&mut enemy, &ground_ctx(Vec2::ZERO), &mut rng, t);
            let expected = normalize_degrees(start + CIRCLE_TURN_RATE * t);
            prop_assert!(heading_gap(enemy.heading, expected) < 1e-2);
        }
    }
}
