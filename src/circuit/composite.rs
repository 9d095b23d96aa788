//! Composite circuits: an ordered list of owned children plus a combination rule.

use super::Circuit;

/// Shared child storage for [`SerialCircuit`] and [`ParallelCircuit`].
///
/// Children are exclusively owned, so a tree built bottom-up cannot contain
/// cycles. Order is preserved so floating-point sums are reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeCircuit {
    circuits: Vec<Circuit>,
}

impl CompositeCircuit {
    /// Create a composite owning `circuits`. Any length is accepted, including zero.
    pub fn new(circuits: Vec<Circuit>) -> Self {
        Self { circuits }
    }

    /// The owned children, in construction order.
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    /// Check if there are no children.
    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }
}

/// Children connected end to end: `R = sum(Ri)`.
///
/// An empty series circuit has zero resistance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerialCircuit {
    composite: CompositeCircuit,
}

impl SerialCircuit {
    /// Create a series combination of `circuits`.
    pub fn new(circuits: Vec<Circuit>) -> Self {
        Self {
            composite: CompositeCircuit::new(circuits),
        }
    }

    /// The owned children, in construction order.
    pub fn circuits(&self) -> &[Circuit] {
        self.composite.circuits()
    }

    /// The shared child storage.
    pub fn composite(&self) -> &CompositeCircuit {
        &self.composite
    }

    /// Sum of the children's resistances.
    pub fn resistance(&self) -> f64 {
        let mut sum = 0.0;
        for circuit in self.circuits() {
            sum += circuit.resistance();
        }
        sum
    }
}

/// Children connected across the same two nodes: `R = 1 / sum(1/Ri)`.
///
/// A zero-ohm child shorts the whole combination (`1/0 = inf`, `1/inf = 0`).
/// An empty parallel circuit is an open circuit and evaluates to `+inf`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParallelCircuit {
    composite: CompositeCircuit,
}

impl ParallelCircuit {
    /// Create a parallel combination of `circuits`.
    pub fn new(circuits: Vec<Circuit>) -> Self {
        Self {
            composite: CompositeCircuit::new(circuits),
        }
    }

    /// The owned children, in construction order.
    pub fn circuits(&self) -> &[Circuit] {
        self.composite.circuits()
    }

    /// The shared child storage.
    pub fn composite(&self) -> &CompositeCircuit {
        &self.composite
    }

    /// Reciprocal of the sum of the children's conductances.
    pub fn resistance(&self) -> f64 {
        // IEEE-754 division handles both the short (1/0) and the open (1/0 total) cases.
        let mut conductance = 0.0;
        for circuit in self.circuits() {
            conductance += 1.0 / circuit.resistance();
        }
        1.0 / conductance
    }
}
