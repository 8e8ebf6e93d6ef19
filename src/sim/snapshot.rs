//! Read-only view of the game for renderers and HUDs
//!
//! Taken after a tick; owns its data so the caller can hold it while the
//! simulation keeps running.

use glam::Vec2;
use serde::Serialize;

use super::random::RandomSource;
use super::state::{EnemyBehavior, GameEvent, GameState, LaunchState, PickupCounters};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchView {
    pub state: LaunchState,
    pub angle: f32,
    pub power: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub heading: f32,
    pub behavior: EnemyBehavior,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetView {
    pub position: Vec2,
    pub golden: bool,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub launch: LaunchView,
    pub enemies: Vec<EnemyView>,
    pub targets: Vec<TargetView>,
    pub score: u32,
    pub golden_active: bool,
    pub golden_remaining: f32,
    pub golden_threshold: u32,
    pub counters: PickupCounters,
    pub enemies_spawned: u32,
    pub time: f32,
    pub ticks: u64,
    pub events: Vec<GameEvent>,
}

impl<R: RandomSource> GameState<R> {
    /// Copy out the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: PlayerView {
                position: self.player.pos,
                velocity: self.player.vel,
            },
            launch: LaunchView {
                state: self.launch.state,
                angle: self.launch.angle,
                power: self.launch.power,
            },
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    position: e.pos,
                    heading: e.heading,
                    behavior: e.behavior,
                })
                .collect(),
            targets: self
                .targets
                .iter()
                .map(|t| TargetView {
                    position: t.pos,
                    golden: t.golden,
                })
                .collect(),
            score: self.score,
            golden_active: self.golden_active(),
            golden_remaining: self.golden_remaining,
            golden_threshold: self.golden_threshold,
            counters: self.counters,
            enemies_spawned: self.enemies_spawned,
            time: self.time,
            ticks: self.ticks,
            events: self.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SequenceRandom;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::with_rng(SequenceRandom::midpoint());
        state.score = 40;
        state.golden_remaining = 1.5;
        let snap = state.snapshot();
        assert_eq!(snap.score, 40);
        assert!(snap.golden_active);
        assert_eq!(snap.enemies.len(), state.enemies.len());
        assert_eq!(snap.targets.len(), state.targets.len());
        assert_eq!(snap.enemies[0].position, state.enemies[0].pos);
        assert_eq!(snap.launch.state, LaunchState::Aiming);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::new(1);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["launch"]["state"], "Aiming");
        assert_eq!(json["enemies"][0]["behavior"], "Chase");
        assert_eq!(json["targets"].as_array().map(|t| t.len()), Some(10));
    }
}
