//! One-dimensional biased random walk.

use crate::error::{require_probability, require_steps, KernelResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-call configuration for the walk evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkParameters {
    pub steps: usize,
    /// Probability of moving right (+1) on each step.
    pub p: f64,
}

impl Default for WalkParameters {
    fn default() -> Self {
        Self { steps: 200, p: 0.5 }
    }
}

impl WalkParameters {
    pub fn evaluate(&self) -> KernelResult<Vec<i64>> {
        evaluate_walk(self.steps, self.p)
    }

    pub fn evaluate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> KernelResult<Vec<i64>> {
        evaluate_walk_with(self.steps, self.p, rng)
    }
}

/// Walks `steps` positions starting at 0, drawing from the thread-local RNG.
/// Repeated calls with the same arguments are expected to differ.
pub fn evaluate_walk(steps: usize, p: f64) -> KernelResult<Vec<i64>> {
    evaluate_walk_with(steps, p, &mut rand::thread_rng())
}

/// Walks `steps` positions starting at 0 using the supplied randomness.
///
/// Each step draws `u` uniformly from [0, 1) and moves +1 when `u < p`,
/// otherwise −1. `p = 0` therefore always moves left and `p = 1` always
/// moves right, independent of the source.
pub fn evaluate_walk_with<R: Rng + ?Sized>(
    steps: usize,
    p: f64,
    rng: &mut R,
) -> KernelResult<Vec<i64>> {
    require_steps(steps)?;
    require_probability(p)?;

    let mut positions = Vec::with_capacity(steps);
    let mut position = 0i64;
    positions.push(position);
    for _ in 1..steps {
        let draw: f64 = rng.gen();
        position += if draw < p { 1 } else { -1 };
        positions.push(position);
    }
    Ok(positions)
}
