//! Browser bridge for `cobweb_core`.
//!
//! Free functions cover the one-shot evaluators a plotting front end calls on
//! every slider change; `WasmMapSystem` keeps a map and its current state for
//! stepping interactively.

mod analysis;
mod evaluate;
mod system;

pub use analysis::{bifurcation_diagram, classify_orbit, compare_trajectories};
pub use evaluate::{evaluate_map, evaluate_walk, run_scenario, scenario_preset};
pub use system::WasmMapSystem;

use cobweb_core::MapRule;
use wasm_bindgen::JsValue;

pub(crate) fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

pub(crate) fn parse_rule(rule: &str) -> Result<MapRule, JsValue> {
    rule.parse::<MapRule>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
