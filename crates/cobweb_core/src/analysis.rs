//! Orbit analysis: trajectory comparison, period detection, Lyapunov
//! estimates, and regime classification for the logistic-family maps.

use crate::error::{KernelError, KernelResult};
use crate::maps::{evaluate_map, MapRule, ParametricMap};
use crate::traits::IteratedMap;
use anyhow::{bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Maximum distance at which two iterates count as the same point.
    pub tolerance: f64,
    pub max_period: usize,
    /// Iterates discarded before sampling the orbit.
    pub transient: usize,
    /// Iterates kept after the transient for period detection.
    pub tail: usize,
    pub lyapunov_steps: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_period: 64,
            transient: 200,
            tail: 128,
            lyapunov_steps: 1000,
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> KernelResult<()> {
        require_tolerance(self.tolerance)?;
        if self.max_period == 0 {
            return Err(KernelError::invalid("max_period", "must be at least 1"));
        }
        if self.tail < 2 {
            return Err(KernelError::invalid("tail", "must keep at least 2 iterates"));
        }
        if self.lyapunov_steps == 0 {
            return Err(KernelError::invalid("lyapunov_steps", "must be at least 1"));
        }
        Ok(())
    }
}

fn require_tolerance(tolerance: f64) -> KernelResult<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(KernelError::invalid(
            "tolerance",
            format!("must be finite and non-negative, got {tolerance}"),
        ));
    }
    Ok(())
}

/// Two orbits of the same map started from nearby points.
#[derive(Debug, Clone, Serialize)]
pub struct SensitivityReport {
    pub first: Vec<f64>,
    pub second: Vec<f64>,
    /// |first_i − second_i| for every step.
    pub separation: Vec<f64>,
    /// First step whose separation exceeds the threshold.
    pub first_divergence: Option<usize>,
    pub max_separation: f64,
}

pub fn compare_trajectories(
    x0_a: f64,
    x0_b: f64,
    r: f64,
    steps: usize,
    rule: MapRule,
    threshold: f64,
) -> Result<SensitivityReport> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(KernelError::invalid(
            "threshold",
            format!("must be finite and positive, got {threshold}"),
        )
        .into());
    }

    let first = evaluate_map(x0_a, r, steps, rule).context("Failed to evaluate first trajectory.")?;
    let second =
        evaluate_map(x0_b, r, steps, rule).context("Failed to evaluate second trajectory.")?;

    let separation: Vec<f64> = first
        .iter()
        .zip(&second)
        .map(|(a, b)| (a - b).abs())
        .collect();
    let first_divergence = separation.iter().position(|&s| s > threshold);
    let max_separation = separation.iter().copied().fold(0.0, f64::max);

    Ok(SensitivityReport {
        first,
        second,
        separation,
        first_divergence,
        max_separation,
    })
}

/// Smallest period `p <= max_period` such that every sample repeats `p`
/// steps later within `tolerance`. Orbits containing non-finite values
/// never have a period, and at least two full repetitions are required.
pub fn detect_period(orbit: &[f64], tolerance: f64, max_period: usize) -> Result<Option<usize>> {
    require_tolerance(tolerance)?;
    if max_period == 0 {
        bail!("max_period must be at least 1.");
    }
    if orbit.iter().any(|v| !v.is_finite()) {
        return Ok(None);
    }

    let limit = max_period.min(orbit.len() / 2);
    for period in 1..=limit {
        let repeats = (period..orbit.len()).all(|i| (orbit[i] - orbit[i - period]).abs() <= tolerance);
        if repeats {
            return Ok(Some(period));
        }
    }
    Ok(None)
}

/// Mean of ln|f'(x_k)| over `steps` iterates following `transient`
/// discarded ones. A zero derivative contributes −∞ and is returned as is.
pub fn lyapunov_exponent(
    rule: MapRule,
    x0: f64,
    r: f64,
    steps: usize,
    transient: usize,
) -> Result<f64> {
    if steps == 0 {
        bail!("Lyapunov estimate requires at least one step.");
    }

    let system = ParametricMap::new(rule, r);
    let mut stepper = system.orbit(x0);
    stepper.skip_transient(transient);
    let accum: f64 = stepper
        .take(steps)
        .map(|x| system.derivative(x).abs().ln())
        .sum();

    Ok(accum / steps as f64)
}

/// Long-run behaviour of an orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "period", rename_all = "kebab-case")]
pub enum Regime {
    /// Settles on zero.
    Extinction,
    FixedPoint,
    Periodic(usize),
    Chaotic,
    /// Bounded, no detected period, non-positive Lyapunov estimate.
    Aperiodic,
    /// Leaves the finite range.
    Divergent,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrbitSummary {
    pub regime: Regime,
    pub period: Option<usize>,
    pub lyapunov: f64,
    pub finite: bool,
    /// Samples the classification was made from.
    pub tail: Vec<f64>,
}

pub fn classify_orbit(
    rule: MapRule,
    x0: f64,
    r: f64,
    settings: &AnalysisSettings,
) -> Result<OrbitSummary> {
    settings.validate().context("Invalid analysis settings.")?;

    let system = ParametricMap::new(rule, r);
    let mut stepper = system.orbit(x0);
    stepper.skip_transient(settings.transient);
    // One window feeds the period check, the Lyapunov mean and `finite`,
    // so an orbit escaping anywhere in it is reported as divergent.
    let window: Vec<f64> = stepper
        .take(settings.tail.max(settings.lyapunov_steps))
        .collect();
    let finite = window.iter().all(|v| v.is_finite());

    let tail = window[..settings.tail].to_vec();
    let period = detect_period(&tail, settings.tolerance, settings.max_period)?;
    let lyapunov = window[..settings.lyapunov_steps]
        .iter()
        .map(|&x| system.derivative(x).abs().ln())
        .sum::<f64>()
        / settings.lyapunov_steps as f64;

    let regime = match period {
        _ if !finite => Regime::Divergent,
        Some(1) if tail[tail.len() - 1].abs() <= settings.tolerance => Regime::Extinction,
        Some(1) => Regime::FixedPoint,
        Some(p) => Regime::Periodic(p),
        None if lyapunov > 0.0 => Regime::Chaotic,
        None => Regime::Aperiodic,
    };
    debug!("{rule} orbit (x0 = {x0}, r = {r}) classified as {regime:?}, lyapunov = {lyapunov}");

    Ok(OrbitSummary {
        regime,
        period,
        lyapunov,
        finite,
        tail,
    })
}

/// Post-transient samples of the orbit for one parameter value.
#[derive(Debug, Clone, Serialize)]
pub struct BifurcationColumn {
    pub r: f64,
    pub values: Vec<f64>,
}

/// Samples the attractor over a sweep of `r`, keeping `settings.tail`
/// iterates after `settings.transient` for each value.
pub fn bifurcation_diagram(
    rule: MapRule,
    x0: f64,
    r_values: &[f64],
    settings: &AnalysisSettings,
) -> Result<Vec<BifurcationColumn>> {
    settings.validate().context("Invalid analysis settings.")?;
    if r_values.is_empty() {
        bail!("Bifurcation sweep requires at least one parameter value.");
    }

    Ok(r_values
        .iter()
        .map(|&r| {
            let system = ParametricMap::new(rule, r);
            let mut stepper = system.orbit(x0);
            stepper.skip_transient(settings.transient);
            BifurcationColumn {
                r,
                values: stepper.take(settings.tail).collect(),
            }
        })
        .collect())
}
