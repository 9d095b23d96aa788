//! Circuit trees and their equivalent resistance.
//!
//! A [`Circuit`] is either a leaf [`Resistor`] or a composite node that owns an
//! ordered list of child circuits. Two composition rules exist:
//!
//! | Variant | Rule |
//! |---------|------|
//! | [`SerialCircuit`] | `R = R1 + R2 + ... + Rn` |
//! | [`ParallelCircuit`] | `R = 1 / (1/R1 + 1/R2 + ... + 1/Rn)` |
//!
//! Trees are immutable once built, so [`Circuit::resistance`] is a pure
//! recursive read and may be called concurrently from any number of threads.
//!
//! # Example
//!
//! ```
//! use resistance_core::circuit::Circuit;
//!
//! // (2 || 2) + 1
//! let circuit = Circuit::serial(vec![
//!     Circuit::parallel(vec![Circuit::resistor(2.0)?, Circuit::resistor(2.0)?]),
//!     Circuit::resistor(1.0)?,
//! ]);
//! assert_eq!(circuit.resistance(), 2.0);
//! # Ok::<(), resistance_core::ResistanceError>(())
//! ```

mod composite;
mod resistor;

pub use composite::{CompositeCircuit, ParallelCircuit, SerialCircuit};
pub use resistor::Resistor;

use std::fmt;

use crate::error::Result;

/// A node in a circuit tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Circuit {
    Resistor(Resistor),
    Serial(SerialCircuit),
    Parallel(ParallelCircuit),
}

impl Circuit {
    /// Create a resistor leaf.
    ///
    /// Fails with [`InvalidArgument`](crate::ResistanceError::InvalidArgument)
    /// if `value` is negative.
    pub fn resistor(value: f64) -> Result<Self> {
        Resistor::new(value).map(Self::Resistor)
    }

    /// Create a series combination of `children`.
    pub fn serial(children: Vec<Circuit>) -> Self {
        Self::Serial(SerialCircuit::new(children))
    }

    /// Create a parallel combination of `children`.
    pub fn parallel(children: Vec<Circuit>) -> Self {
        Self::Parallel(ParallelCircuit::new(children))
    }

    /// Equivalent resistance of this subtree.
    pub fn resistance(&self) -> f64 {
        match self {
            Self::Resistor(r) => r.resistance(),
            Self::Serial(s) => s.resistance(),
            Self::Parallel(p) => p.resistance(),
        }
    }

    /// Child circuits, empty for a resistor.
    pub fn circuits(&self) -> &[Circuit] {
        match self {
            Self::Resistor(_) => &[],
            Self::Serial(s) => s.circuits(),
            Self::Parallel(p) => p.circuits(),
        }
    }

    /// The fixture keyword naming this variant.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Resistor(_) => "Resistor",
            Self::Serial(_) => "SerialCircuit",
            Self::Parallel(_) => "ParallelCircuit",
        }
    }
}

impl From<Resistor> for Circuit {
    fn from(r: Resistor) -> Self {
        Self::Resistor(r)
    }
}

impl From<SerialCircuit> for Circuit {
    fn from(s: SerialCircuit) -> Self {
        Self::Serial(s)
    }
}

impl From<ParallelCircuit> for Circuit {
    fn from(p: ParallelCircuit) -> Self {
        Self::Parallel(p)
    }
}

/// Renders the token-delimited fixture notation, e.g.
/// `SerialCircuit 2 Resistor 2 Resistor 3`.
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Fixture spelling of infinity; resistors are never negative or NaN.
            Self::Resistor(r) if r.value().is_infinite() => write!(f, "{} Infinity", self.keyword()),
            Self::Resistor(r) => write!(f, "{} {}", self.keyword(), r.value()),
            Self::Serial(_) | Self::Parallel(_) => {
                let children = self.circuits();
                write!(f, "{} {}", self.keyword(), children.len())?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn r(value: f64) -> Circuit {
        Circuit::resistor(value).unwrap()
    }

    #[test]
    fn test_resistor_scenario() {
        assert_eq!(r(10.0).resistance(), 10.0);
    }

    #[test]
    fn test_negative_resistor_rejected() {
        assert!(matches!(
            Circuit::resistor(-1.0),
            Err(crate::ResistanceError::InvalidArgument { value }) if value == -1.0
        ));
    }

    #[test]
    fn test_serial_scenario() {
        let c = Circuit::serial(vec![r(2.0), r(3.0)]);
        assert_eq!(c.resistance(), 5.0);
    }

    #[test]
    fn test_parallel_scenario() {
        let c = Circuit::parallel(vec![r(2.0), r(2.0)]);
        assert_eq!(c.resistance(), 1.0);
    }

    #[test]
    fn test_nested() {
        let c = Circuit::serial(vec![Circuit::parallel(vec![r(2.0), r(2.0)]), r(1.0)]);
        assert_abs_diff_eq!(c.resistance(), 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_single_child_identity() {
        for value in [0.0, 0.5, 47.0, 1e6] {
            assert_eq!(Circuit::serial(vec![r(value)]).resistance(), value);
            assert_abs_diff_eq!(
                Circuit::parallel(vec![r(value)]).resistance(),
                value,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_deep_nesting() {
        // ((1 + 1) || 2) + (3 || 6) = 1 + 2
        let c = Circuit::serial(vec![
            Circuit::parallel(vec![Circuit::serial(vec![r(1.0), r(1.0)]), r(2.0)]),
            Circuit::parallel(vec![r(3.0), r(6.0)]),
        ]);
        assert_abs_diff_eq!(c.resistance(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_deterministic_rebuild() {
        let build = || {
            Circuit::parallel(vec![
                r(1.1),
                Circuit::serial(vec![r(2.2), r(3.3)]),
                r(7.7),
            ])
        };
        let (a, b) = (build(), build());
        assert_eq!(a, b);
        assert_eq!(a.resistance().to_bits(), b.resistance().to_bits());
        assert_eq!(a.resistance().to_bits(), a.resistance().to_bits());
    }

    #[test]
    fn test_circuits_accessor() {
        let c = Circuit::serial(vec![r(1.0), Circuit::parallel(vec![r(2.0)])]);
        assert_eq!(c.circuits().len(), 2);
        assert!(matches!(c.circuits()[0], Circuit::Resistor(_)));
        assert!(matches!(c.circuits()[1], Circuit::Parallel(_)));
        assert!(r(1.0).circuits().is_empty());
    }

    #[test]
    fn test_display() {
        let c = Circuit::serial(vec![Circuit::parallel(vec![r(2.0), r(2.5)]), r(1.0)]);
        assert_eq!(
            c.to_string(),
            "SerialCircuit 2 ParallelCircuit 2 Resistor 2 Resistor 2.5 Resistor 1"
        );
        assert_eq!(Circuit::parallel(vec![]).to_string(), "ParallelCircuit 0");
        assert_eq!(r(f64::INFINITY).to_string(), "Resistor Infinity");
    }

    #[test]
    fn test_shared_across_threads() {
        let c = std::sync::Arc::new(Circuit::parallel(vec![r(3.0), r(6.0)]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let c = std::sync::Arc::clone(&c);
                std::thread::spawn(move || c.resistance())
            })
            .collect();
        for handle in handles {
            assert_abs_diff_eq!(handle.join().unwrap(), 2.0, epsilon = 1e-12);
        }
    }
}
