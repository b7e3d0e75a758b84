//! Stateful map wrapper for interactive stepping.

use crate::{install_panic_hook, parse_rule};
use cobweb_core::maps::{evaluate_map, ParametricMap};
use cobweb_core::traits::IteratedMap;
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMapSystem {
    system: ParametricMap<f64>,
    state: f64,
    iteration: u32,
}

#[wasm_bindgen]
impl WasmMapSystem {
    #[wasm_bindgen(constructor)]
    pub fn new(rule: &str, r: f64) -> Result<WasmMapSystem, JsValue> {
        install_panic_hook();

        let rule = parse_rule(rule)?;
        Ok(WasmMapSystem {
            system: ParametricMap::new(rule, r),
            state: 0.0,
            iteration: 0,
        })
    }

    pub fn set_state(&mut self, state: f64) {
        self.state = state;
        self.iteration = 0;
    }

    pub fn get_state(&self) -> f64 {
        self.state
    }

    pub fn set_r(&mut self, r: f64) {
        self.system.r = r;
    }

    pub fn get_r(&self) -> f64 {
        self.system.r
    }

    pub fn get_rule(&self) -> String {
        self.system.rule.to_string()
    }

    pub fn get_iteration(&self) -> u32 {
        self.iteration
    }

    /// Applies the map `iterations` times and returns the new state.
    pub fn step(&mut self, iterations: u32) -> f64 {
        for _ in 0..iterations {
            self.state = self.system.apply(self.state);
        }
        self.iteration = self.iteration.saturating_add(iterations);
        self.state
    }

    /// f'(x) at the current state.
    pub fn compute_derivative(&self) -> f64 {
        self.system.derivative(self.state)
    }

    /// The next `steps` iterates starting from the current state, without
    /// advancing it.
    pub fn orbit(&self, steps: u32) -> Result<Float64Array, JsValue> {
        let orbit = evaluate_map(self.state, self.system.r, steps as usize, self.system.rule)
            .map_err(|e| JsValue::from_str(&format!("Map evaluation failed: {}", e)))?;
        Ok(Float64Array::from(orbit.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::WasmMapSystem;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn rejects_unknown_rule() {
        assert!(WasmMapSystem::new("henon", 1.4).is_err());
    }

    #[wasm_bindgen_test]
    fn steps_and_tracks_iterations() {
        let mut system = WasmMapSystem::new("logistic", 2.0).expect("system should build");
        system.set_state(0.5);
        assert_eq!(system.step(3), 0.5);
        assert_eq!(system.get_iteration(), 3);
        assert_eq!(system.compute_derivative(), 0.0);

        system.set_state(0.25);
        assert_eq!(system.get_iteration(), 0);
        assert_eq!(system.step(1), 0.375);
    }

    #[wasm_bindgen_test]
    fn orbit_does_not_advance_state() {
        let mut system = WasmMapSystem::new("sine", 0.9).expect("system should build");
        system.set_state(0.3);
        let orbit = system.orbit(5).expect("orbit should evaluate");
        assert_eq!(orbit.length(), 5);
        assert_eq!(system.get_state(), 0.3);
        assert_eq!(system.get_rule(), "sine");
        assert!(system.orbit(0).is_err());
    }
}
