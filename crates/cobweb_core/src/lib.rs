/// The `cobweb_core` crate is the numerical kernel behind the Cobweb dashboard
/// for exploring discrete dynamical systems.
///
/// Key components:
/// - **Maps**: logistic and sine recurrences (`MapRule`) and the `evaluate_map` entry point.
/// - **Solvers**: the lazy `DiscreteMap` stepper that produces iterates.
/// - **Walk**: the ±1 random walk with an injectable `rand::Rng`.
/// - **Analysis**: trajectory comparison, period detection, Lyapunov estimates and regime classification.
/// - **Scenarios**: parameter presets for each interactive view.
pub mod analysis;
pub mod error;
pub mod maps;
pub mod scenarios;
pub mod solvers;
pub mod traits;
pub mod walk;

pub use error::{KernelError, KernelResult};
pub use maps::{evaluate_map, MapParameters, MapRule};
pub use walk::{evaluate_walk, evaluate_walk_with, WalkParameters};
