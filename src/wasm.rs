//! WASM bindings for Resistance Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { evaluate, check } from 'resistance_core';
//!
//! await init();
//!
//! evaluate('SerialCircuit 2 Resistor 2 Resistor 3'); // 5
//! check('pair ParallelCircuit 2 Resistor 2 Resistor 2 1.0', 1e-4); // 0 failures
//! ```

use wasm_bindgen::prelude::*;

use crate::fixture;
use crate::runner::{run_cases, RunnerConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Evaluate a single circuit specification.
///
/// Returns the equivalent resistance, which may be `Infinity` for an open
/// circuit, or throws with the parse/construction error message.
#[wasm_bindgen]
pub fn evaluate(spec: &str) -> Result<f64, JsValue> {
    let circuit = fixture::parse_circuit(spec).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(circuit.resistance())
}

/// Run every case of a fixture string and return the number of failing cases.
#[wasm_bindgen]
pub fn check(fixtures: &str, tolerance: f64) -> Result<usize, JsValue> {
    let cases = fixture::parse(fixtures).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let report = run_cases(&cases, &RunnerConfig::new().with_tolerance(tolerance));
    Ok(report.failed())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default comparison tolerance.
#[wasm_bindgen]
pub fn default_tolerance() -> f64 {
    crate::DEFAULT_TOLERANCE
}
