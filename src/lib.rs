//! # Resistance Core
//!
//! Equivalent resistance of ideal resistor networks built from series and
//! parallel groupings.
//!
//! This library provides:
//! - An immutable circuit tree ([`Circuit`]) with a pure, recursive
//!   [`Circuit::resistance`] evaluation
//! - A parser for the token-delimited fixture format
//! - A runner that checks fixture cases against their expected values
//!
//! ## Architecture
//!
//! - [`circuit`] - Resistor, series and parallel nodes
//! - [`fixture`] - Lexer and parser for fixture files
//! - [`runner`] - Case evaluation and reporting
//! - [`error`] - The crate error type
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! resistance check fixtures/circuits.txt
//! resistance eval SerialCircuit 2 ParallelCircuit 2 Resistor 2 Resistor 2 Resistor 1
//! ```
//!
//! ### Library
//!
//! ```
//! use resistance_core::{fixture, Circuit};
//!
//! let circuit = fixture::parse_circuit("ParallelCircuit 2 Resistor 3 Resistor 6")?;
//! assert_eq!(circuit.resistance(), 2.0);
//!
//! let series = Circuit::serial(vec![circuit, Circuit::resistor(1.0)?]);
//! assert_eq!(series.resistance(), 3.0);
//! # Ok::<(), resistance_core::ResistanceError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod fixture;
pub mod runner;

// Re-export main types for convenience
pub use circuit::{Circuit, CompositeCircuit, ParallelCircuit, Resistor, SerialCircuit};
pub use error::{ResistanceError, Result};
pub use runner::{run_cases, Report, RunnerConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

/// Default tolerance (ohms) when comparing a computed resistance to an expected one.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
