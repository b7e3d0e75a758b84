//! One-shot evaluators and scenario presets.

use crate::{install_panic_hook, parse_rule};
use cobweb_core::scenarios::Scenario;
use cobweb_core::{evaluate_map as core_evaluate_map, evaluate_walk as core_evaluate_walk};
use js_sys::{Float64Array, Int32Array};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn evaluate_map(x0: f64, r: f64, steps: u32, rule: &str) -> Result<Float64Array, JsValue> {
    install_panic_hook();
    let rule = parse_rule(rule)?;
    let orbit = core_evaluate_map(x0, r, steps as usize, rule)
        .map_err(|e| JsValue::from_str(&format!("Map evaluation failed: {}", e)))?;
    Ok(Float64Array::from(orbit.as_slice()))
}

#[wasm_bindgen]
pub fn evaluate_walk(steps: u32, p: f64) -> Result<Int32Array, JsValue> {
    install_panic_hook();
    let walk = core_evaluate_walk(steps as usize, p)
        .map_err(|e| JsValue::from_str(&format!("Walk evaluation failed: {}", e)))?;
    // |position| <= steps - 1, so the conversion only fails past 2^31 steps.
    let positions = walk
        .into_iter()
        .map(i32::try_from)
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|_| JsValue::from_str("Walk position exceeds the Int32Array range."))?;
    Ok(Int32Array::from(positions.as_slice()))
}

#[wasm_bindgen]
pub fn scenario_preset(name: &str) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let scenario = name
        .parse::<Scenario>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_value(&scenario.preset())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn run_scenario(name: &str) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let scenario = name
        .parse::<Scenario>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let output = scenario
        .preset()
        .run()
        .map_err(|e| JsValue::from_str(&format!("Scenario {} failed: {}", scenario, e)))?;
    to_value(&output).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::{evaluate_map, evaluate_walk, run_scenario, scenario_preset};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn error_message(err: wasm_bindgen::JsValue) -> String {
        err.as_string().unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn evaluate_map_returns_requested_length() {
        let orbit = evaluate_map(0.5, 3.2, 25, "logistic").expect("map should evaluate");
        assert_eq!(orbit.length(), 25);
        assert_eq!(orbit.get_index(0), 0.5);
    }

    #[wasm_bindgen_test]
    fn evaluate_map_rejects_zero_steps_and_unknown_rule() {
        let message = error_message(evaluate_map(0.5, 1.0, 0, "logistic").unwrap_err());
        assert!(message.contains("steps"), "got \"{message}\"");

        let message = error_message(evaluate_map(0.5, 1.0, 10, "tent").unwrap_err());
        assert!(message.contains("unknown map rule"), "got \"{message}\"");
    }

    #[wasm_bindgen_test]
    fn evaluate_walk_moves_by_unit_steps() {
        let walk = evaluate_walk(100, 1.0).expect("walk should evaluate").to_vec();
        let expected: Vec<i32> = (0..100).collect();
        assert_eq!(walk, expected);

        let message = error_message(evaluate_walk(5, 1.5).unwrap_err());
        assert!(message.contains("probability"), "got \"{message}\"");
    }

    #[wasm_bindgen_test]
    fn scenario_lookups_validate_names() {
        assert!(scenario_preset("sine-map").is_ok());
        assert!(run_scenario("random-walk").is_ok());
        let message = error_message(scenario_preset("authors").unwrap_err());
        assert!(message.contains("unknown scenario"), "got \"{message}\"");
    }
}
