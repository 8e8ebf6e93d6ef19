//! Player ballistic motion and side-wall bounce

use super::state::Player;
use crate::consts::{ARENA_HALF_WIDTH, GRAVITY};

/// Advance a flying player by one step: move, then apply gravity
pub fn integrate_flight(player: &mut Player, dt: f32) {
    player.pos += player.vel * dt;
    player.vel.y -= GRAVITY * dt;
}

/// Bounce the player off the side walls.
///
/// Runs every tick regardless of launch state. The position is mirrored back
/// across the wall and the horizontal velocity is pointed inward, so speed is
/// preserved. A long step can cross the arena several times; the mirror
/// repeats until x is back within the walls.
pub fn reflect_off_walls(player: &mut Player) {
    let wall = ARENA_HALF_WIDTH;
    let x = player.pos.x;
    if !x.is_finite() {
        return;
    }

    // Whole round trips (two mirrors) leave position and direction as they were
    let period = 4.0 * wall;
    let trips = ((x.abs() - wall) / period).floor();
    if trips >= 1.0 {
        player.pos.x = x - x.signum() * trips * period;
    }

    loop {
        if player.pos.x > wall {
            player.vel.x = -player.vel.x.abs();
            player.pos.x = wall - (player.pos.x - wall);
        } else if player.pos.x < -wall {
            player.vel.x = player.vel.x.abs();
            player.pos.x = -wall - (player.pos.x + wall);
        } else {
            break;
        }
    }

    // Resting exactly on a wall still turns the player inward
    if player.pos.x == wall {
        player.vel.x = -player.vel.x.abs();
    } else if player.pos.x == -wall {
        player.vel.x = player.vel.x.abs();
    }
}
