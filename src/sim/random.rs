//! Injectable random source
//!
//! Every random draw in the simulation goes through [`RandomSource`] so tests
//! can swap the seeded generator for a fixed sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform random numbers
pub trait RandomSource {
    /// Uniform real in [min, max]. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    /// Uniform integer in [min, max] inclusive. Returns `min` when `max < min`.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
}

/// Seeded PCG generator used in real play
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Deterministic stub that replays a fixed cycle of fractions.
///
/// Each fraction `t` (clamped to [0, 1]) is mapped onto the requested range as
/// `min + t * (max - min)`; integer draws round to the nearest value.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    index: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.5);
        }
        Self { values, index: 0 }
    }

    /// Stub that always answers the midpoint of the range
    pub fn midpoint() -> Self {
        Self::new(vec![0.5])
    }

    fn next_fraction(&mut self) -> f32 {
        let t = self.values[self.index % self.values.len()];
        self.index += 1;
        t.clamp(0.0, 1.0)
    }
}

impl RandomSource for SequenceRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        let t = self.next_fraction();
        if max <= min {
            return min;
        }
        min + t * (max - min)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        let t = self.next_fraction();
        if max <= min {
            return min;
        }
        let span = (max - min) as f32;
        min + (t * span).round() as i32
    }
}
