//! Named parameter presets for each interactive view of the dashboard.
//!
//! Presets carry the default parameters and the slider ranges a front end
//! offers for them. Ranges are informational; the kernel never clamps
//! inputs to them.

use crate::error::{KernelError, KernelResult};
use crate::maps::{evaluate_map, MapParameters, MapRule};
use crate::walk::WalkParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Logistic map in the extinction and stable bands.
    LogisticIntro,
    /// Two logistic orbits from nearby starting points.
    Sensitivity,
    /// Logistic map across the whole parameter range.
    LogisticExplorer,
    RandomWalk,
    SineMap,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::LogisticIntro,
        Scenario::Sensitivity,
        Scenario::LogisticExplorer,
        Scenario::RandomWalk,
        Scenario::SineMap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::LogisticIntro => "logistic-intro",
            Scenario::Sensitivity => "sensitivity",
            Scenario::LogisticExplorer => "logistic-explorer",
            Scenario::RandomWalk => "random-walk",
            Scenario::SineMap => "sine-map",
        }
    }

    pub fn preset(self) -> ScenarioPreset {
        let (parameters, ranges) = match self {
            Scenario::LogisticIntro => (
                PresetParameters::Map {
                    rule: MapRule::Logistic,
                    params: MapParameters {
                        x0: 0.5,
                        r: 2.5,
                        steps: 50,
                    },
                },
                vec![
                    ParameterRange::new("r", 0.0, 3.0, 0.01),
                    ParameterRange::new("x0", 0.0, 1.0, 0.01),
                    ParameterRange::new("steps", 20.0, 200.0, 10.0),
                ],
            ),
            Scenario::Sensitivity => (
                PresetParameters::Comparison {
                    rule: MapRule::Logistic,
                    params: MapParameters {
                        x0: 0.5,
                        r: 3.65,
                        steps: 190,
                    },
                    x0_b: 0.5001,
                },
                vec![
                    ParameterRange::new("r", 3.0, 4.0, 0.01),
                    ParameterRange::new("steps", 50.0, 200.0, 10.0),
                    ParameterRange::new("x0", 0.0, 1.0, 0.0001),
                    ParameterRange::new("x0_b", 0.0, 1.0, 0.0001),
                ],
            ),
            Scenario::LogisticExplorer => (
                PresetParameters::Map {
                    rule: MapRule::Logistic,
                    params: MapParameters {
                        x0: 0.5,
                        r: 3.2,
                        steps: 200,
                    },
                },
                vec![
                    ParameterRange::new("x0", 0.0, 1.0, 0.01),
                    ParameterRange::new("r", 0.0, 4.0, 0.01),
                    ParameterRange::new("steps", 50.0, 500.0, 10.0),
                ],
            ),
            Scenario::RandomWalk => (
                PresetParameters::Walk {
                    params: WalkParameters { steps: 200, p: 0.5 },
                },
                vec![
                    ParameterRange::new("steps", 50.0, 500.0, 1.0),
                    ParameterRange::new("p", 0.0, 1.0, 0.01),
                ],
            ),
            Scenario::SineMap => (
                PresetParameters::Map {
                    rule: MapRule::Sine,
                    params: MapParameters {
                        x0: 0.5,
                        r: 2.5,
                        steps: 200,
                    },
                },
                vec![
                    ParameterRange::new("x0", 0.0, 1.0, 0.01),
                    ParameterRange::new("r", 0.0, 4.0, 0.01),
                    ParameterRange::new("steps", 50.0, 500.0, 1.0),
                ],
            ),
        };

        ScenarioPreset {
            scenario: self,
            parameters,
            ranges,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KernelError::invalid("scenario", format!("unknown scenario \"{wanted}\"")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    fn new(name: &str, min: f64, max: f64, step: f64) -> Self {
        Self {
            name: name.to_string(),
            min,
            max,
            step,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PresetParameters {
    Map {
        rule: MapRule,
        params: MapParameters,
    },
    Comparison {
        rule: MapRule,
        params: MapParameters,
        x0_b: f64,
    },
    Walk {
        params: WalkParameters,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPreset {
    pub scenario: Scenario,
    pub parameters: PresetParameters,
    pub ranges: Vec<ParameterRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScenarioOutput {
    Map { values: Vec<f64> },
    Comparison { first: Vec<f64>, second: Vec<f64> },
    Walk { positions: Vec<i64> },
}

impl ScenarioPreset {
    pub fn range(&self, name: &str) -> Option<&ParameterRange> {
        self.ranges.iter().find(|range| range.name == name)
    }

    /// Evaluates the preset's parameters. Walks draw from the thread RNG.
    pub fn run(&self) -> KernelResult<ScenarioOutput> {
        match &self.parameters {
            PresetParameters::Map { rule, params } => Ok(ScenarioOutput::Map {
                values: params.evaluate(*rule)?,
            }),
            PresetParameters::Comparison { rule, params, x0_b } => Ok(ScenarioOutput::Comparison {
                first: params.evaluate(*rule)?,
                second: evaluate_map(*x0_b, params.r, params.steps, *rule)?,
            }),
            PresetParameters::Walk { params } => Ok(ScenarioOutput::Walk {
                positions: params.evaluate()?,
            }),
        }
    }
}
