//! Logistic-family map evaluator.

use crate::error::{require_steps, KernelError, KernelResult};
use crate::solvers::DiscreteMap;
use crate::traits::{IteratedMap, Scalar};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recurrence rules supported by the map evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapRule {
    /// f(x, r) = r·x·(1 − x)
    Logistic,
    /// f(x, r) = r·sin(π·x)
    Sine,
}

impl MapRule {
    pub fn apply<T: Scalar>(self, x: T, r: T) -> T {
        match self {
            MapRule::Logistic => r * x * (T::one() - x),
            MapRule::Sine => r * (T::PI() * x).sin(),
        }
    }

    pub fn derivative<T: Scalar>(self, x: T, r: T) -> T {
        match self {
            MapRule::Logistic => r * (T::one() - (x + x)),
            MapRule::Sine => r * T::PI() * (T::PI() * x).cos(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MapRule::Logistic => "logistic",
            MapRule::Sine => "sine",
        }
    }
}

impl fmt::Display for MapRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapRule {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logistic" => Ok(MapRule::Logistic),
            "sine" => Ok(MapRule::Sine),
            other => Err(KernelError::invalid(
                "rule",
                format!("unknown map rule \"{other}\" (expected \"logistic\" or \"sine\")"),
            )),
        }
    }
}

/// A rule bound to a fixed growth/shape parameter `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricMap<T: Scalar> {
    pub rule: MapRule,
    pub r: T,
}

impl<T: Scalar> ParametricMap<T> {
    pub fn new(rule: MapRule, r: T) -> Self {
        Self { rule, r }
    }

    /// Lazily iterates the map from `x0`.
    pub fn orbit(&self, x0: T) -> DiscreteMap<'_, Self, T> {
        DiscreteMap::new(self, x0)
    }
}

impl<T: Scalar> IteratedMap<T> for ParametricMap<T> {
    fn apply(&self, x: T) -> T {
        self.rule.apply(x, self.r)
    }

    fn derivative(&self, x: T) -> T {
        self.rule.derivative(x, self.r)
    }
}

/// Per-call configuration for the map evaluator.
/// Bounds on `x0` and `r` belong to the caller; only `steps` is checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapParameters {
    pub x0: f64,
    pub r: f64,
    pub steps: usize,
}

impl Default for MapParameters {
    fn default() -> Self {
        Self {
            x0: 0.5,
            r: 3.2,
            steps: 200,
        }
    }
}

impl MapParameters {
    pub fn evaluate(&self, rule: MapRule) -> KernelResult<Vec<f64>> {
        evaluate_map(self.x0, self.r, self.steps, rule)
    }
}

/// Produces `[x0, f(x0, r), f(f(x0, r), r), ...]` with exactly `steps` entries.
///
/// Iterates that leave [0, 1], overflow, or become NaN are returned unchanged.
pub fn evaluate_map(x0: f64, r: f64, steps: usize, rule: MapRule) -> KernelResult<Vec<f64>> {
    require_steps(steps)?;

    let system = ParametricMap::new(rule, r);
    let orbit: Vec<f64> = system.orbit(x0).take(steps).collect();

    if let Some(idx) = orbit.iter().position(|value| !value.is_finite()) {
        debug!(
            "{rule} orbit (x0 = {x0}, r = {r}) left the finite range at step {idx}: {}",
            orbit[idx]
        );
    }

    Ok(orbit)
}
