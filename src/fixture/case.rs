//! Parsed fixture records.

use crate::circuit::Circuit;

/// One named test case: a circuit and the resistance it should evaluate to.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureCase {
    /// Case name, the first token of the record
    pub name: String,
    /// Circuit built from the record's specification
    pub circuit: Circuit,
    /// Expected equivalent resistance
    pub expected: f64,
    /// Source line of the case name, for reporting
    pub line: usize,
}

/// Circuit keywords recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitKind {
    Resistor,
    Serial,
    Parallel,
}

impl CircuitKind {
    /// Look up a keyword. Matching is case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Resistor" => Some(Self::Resistor),
            "SerialCircuit" => Some(Self::Serial),
            "ParallelCircuit" => Some(Self::Parallel),
            _ => None,
        }
    }
}
