//! Orbit analysis runners.

use crate::{install_panic_hook, parse_rule};
use cobweb_core::analysis::{
    bifurcation_diagram as core_bifurcation, classify_orbit as core_classify,
    compare_trajectories as core_compare, AnalysisSettings,
};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Reads optional settings; `undefined` and `null` fall back to defaults.
fn settings_from_js(settings: JsValue) -> Result<AnalysisSettings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(AnalysisSettings::default());
    }
    from_value(settings).map_err(|e| JsValue::from_str(&format!("Invalid analysis settings: {}", e)))
}

#[wasm_bindgen]
pub fn compare_trajectories(
    x0_a: f64,
    x0_b: f64,
    r: f64,
    steps: u32,
    rule: &str,
    threshold: f64,
) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let rule = parse_rule(rule)?;
    let report = core_compare(x0_a, x0_b, r, steps as usize, rule, threshold)
        .map_err(|e| JsValue::from_str(&format!("Trajectory comparison failed: {:#}", e)))?;
    to_value(&report).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn classify_orbit(rule: &str, x0: f64, r: f64, settings: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let rule = parse_rule(rule)?;
    let settings = settings_from_js(settings)?;
    let summary = core_classify(rule, x0, r, &settings)
        .map_err(|e| JsValue::from_str(&format!("Orbit classification failed: {:#}", e)))?;
    to_value(&summary).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn bifurcation_diagram(
    rule: &str,
    x0: f64,
    r_values: Vec<f64>,
    settings: JsValue,
) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let rule = parse_rule(rule)?;
    let settings = settings_from_js(settings)?;
    let columns = core_bifurcation(rule, x0, &r_values, &settings)
        .map_err(|e| JsValue::from_str(&format!("Bifurcation sweep failed: {:#}", e)))?;
    to_value(&columns).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::{bifurcation_diagram, classify_orbit, compare_trajectories};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn error_message(err: JsValue) -> String {
        err.as_string().unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn compare_trajectories_rejects_non_positive_threshold() {
        let message = error_message(
            compare_trajectories(0.1, 0.1001, 3.9, 50, "logistic", 0.0).unwrap_err(),
        );
        assert!(message.contains("threshold"), "got \"{message}\"");
        assert!(compare_trajectories(0.1, 0.1001, 3.9, 50, "logistic", 0.1).is_ok());
    }

    #[wasm_bindgen_test]
    fn classify_orbit_accepts_missing_settings() {
        assert!(classify_orbit("logistic", 0.5, 3.2, JsValue::UNDEFINED).is_ok());
        assert!(classify_orbit("sine", 0.5, 2.5, JsValue::NULL).is_ok());
    }

    #[wasm_bindgen_test]
    fn bifurcation_diagram_requires_parameter_values() {
        let message =
            error_message(bifurcation_diagram("logistic", 0.5, vec![], JsValue::UNDEFINED).unwrap_err());
        assert!(message.contains("at least one parameter value"), "got \"{message}\"");
    }
}
