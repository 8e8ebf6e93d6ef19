//! Egg Toss headless runner
//!
//! Plays the simulation with a scripted autopilot at a fixed frame rate and
//! logs what happens. Usage: `egg-toss [settings.json]`.

use std::path::Path;

use egg_toss::Settings;
use egg_toss::sim::{GameEvent, GameState, LaunchState, RandomSource, SimRng, TickInput, tick};

/// Scripted player: picks an aim and a charge, throws, waits for landing
struct Autopilot {
    rng: SimRng,
    aim: Option<f32>,
    charge: f32,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: SimRng::new(seed.rotate_left(17) ^ 0xa5a5),
            aim: None,
            charge: 0.0,
        }
    }

    fn input(&mut self, state: &GameState) -> TickInput {
        match state.launch.state {
            LaunchState::Aiming => {
                let aim = *self.aim.get_or_insert_with(|| self.rng.uniform(35.0, 145.0));
                let angle = state.launch.angle;
                if (angle - aim).abs() > 1.0 {
                    TickInput {
                        turn_left: angle < aim,
                        turn_right: angle > aim,
                        hold_power: false,
                    }
                } else {
                    self.charge = self.rng.uniform(3.0, 10.0);
                    TickInput {
                        hold_power: true,
                        ..Default::default()
                    }
                }
            }
            LaunchState::Charging => TickInput {
                hold_power: state.launch.power < self.charge,
                ..Default::default()
            },
            LaunchState::Flying => {
                self.aim = None;
                TickInput::default()
            }
        }
    }
}

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.resolve_seed();
    log::info!("Egg Toss (headless) starting with seed {}", seed);

    let mut state = GameState::new(seed);
    let mut pilot = Autopilot::new(seed);
    let dt = settings.clamp_frame_dt(settings.frame_dt());
    let frames = (settings.demo_seconds * settings.frame_rate as f32).max(0.0) as u64;

    let mut best_score = 0;
    let mut deaths = 0;
    for frame in 0..frames {
        let input = pilot.input(&state);
        tick(&mut state, &input, dt);
        best_score = best_score.max(state.score);

        for event in &state.events {
            match event {
                GameEvent::PlayerKilled => deaths += 1,
                GameEvent::TargetCollected { .. } | GameEvent::EnemyStateChanged { .. } => {}
                other => log::debug!("frame {}: {:?}", frame, other),
            }
        }

        if settings.log_snapshots && frame % settings.frame_rate.max(1) as u64 == 0 {
            match serde_json::to_string(&state.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(err) => log::warn!("Snapshot serialization failed: {}", err),
            }
        }
    }

    log::info!(
        "Finished {} frames: score {}, best {}, deaths {}",
        frames,
        state.score,
        best_score,
        deaths
    );
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Snapshot serialization failed: {}", err),
    }
}
