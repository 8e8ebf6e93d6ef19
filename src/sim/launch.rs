//! Launch state machine
//!
//! Aiming -> Charging on a power press, Charging -> Flying on release,
//! Flying -> Aiming when the player touches the ground. Charging keeps the
//! aim controls live, so both phases share [`apply_aim`].

use glam::Vec2;

use super::geometry::mag;
use super::physics;
use super::state::{Launch, LaunchState, Player};
use super::tick::TickInput;
use crate::consts::*;
use crate::heading_vector;

/// What the launch step did this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchOutcome {
    None,
    /// Player left the ground with this velocity
    Launched(Vec2),
    /// Player came back down; pool refill and escalation are due
    Landed,
}

/// Turn the aim from the left/right signals, staying within the angle limits
pub fn apply_aim(launch: &mut Launch, input: &TickInput, dt: f32) {
    if input.turn_left {
        launch.angle = (launch.angle + AIM_RATE * dt).min(MAX_ANGLE);
    }
    if input.turn_right {
        launch.angle = (launch.angle - AIM_RATE * dt).max(MIN_ANGLE);
    }
    launch.angle = launch.angle.clamp(MIN_ANGLE, MAX_ANGLE);
}

/// Velocity for a launch at `angle` degrees with `power`
pub fn launch_velocity(angle: f32, power: f32) -> Vec2 {
    heading_vector(angle) * power
}

/// Advance the launch state machine and, while flying, the player's flight
pub fn step_launch(
    launch: &mut Launch,
    player: &mut Player,
    input: &TickInput,
    dt: f32,
) -> LaunchOutcome {
    let pressed = input.hold_power && !launch.power_held;
    launch.power_held = input.hold_power;

    let mut outcome = LaunchOutcome::None;

    // Transitions first, so the entered phase runs this same frame
    match launch.state {
        LaunchState::Aiming if pressed => {
            launch.state = LaunchState::Charging;
        }
        LaunchState::Charging if !input.hold_power => {
            launch.state = LaunchState::Flying;
            player.vel = launch_velocity(launch.angle, launch.power);
            log::debug!(
                "Launch at {:.1} deg, power {:.2}, speed {:.2}",
                launch.angle,
                launch.power,
                mag(player.vel)
            );
            outcome = LaunchOutcome::Launched(player.vel);
        }
        _ => {}
    }

    match launch.state {
        LaunchState::Aiming => apply_aim(launch, input, dt),
        LaunchState::Charging => {
            apply_aim(launch, input, dt);
            launch.power = (launch.power + CHARGE_RATE * dt).clamp(0.0, MAX_POWER);
        }
        LaunchState::Flying => {
            physics::integrate_flight(player, dt);
            if player.pos.y <= 0.0 {
                land(launch, player);
                outcome = LaunchOutcome::Landed;
            }
        }
    }

    outcome
}

/// Put the player back on the ground, ready to aim again
fn land(launch: &mut Launch, player: &mut Player) {
    player.pos.y = 0.0;
    player.vel = Vec2::ZERO;
    launch.state = LaunchState::Aiming;
    launch.angle = NEUTRAL_ANGLE;
    launch.power = 0.0;
    log::debug!("Landed at x = {:.2}", player.pos.x);
}
