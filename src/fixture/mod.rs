//! Parser for the token-delimited fixture format.
//!
//! A fixture file is a sequence of records, each a case name, a recursively
//! encoded circuit and the expected resistance. Whitespace (including line
//! breaks) only separates tokens.
//!
//! # Grammar
//!
//! ```text
//! file    = { case }
//! case    = name circuit number
//! circuit = "Resistor" number
//!         | "SerialCircuit" count { circuit }
//!         | "ParallelCircuit" count { circuit }
//! comment = '#' { any_char }
//! ```
//!
//! `count` is a non-negative integer and is followed by exactly that many
//! nested circuits. `number` is a decimal, `Infinity`, `inf` or `NaN`, with an
//! optional sign. Nesting is limited to [`MAX_NESTING_DEPTH`] levels.
//!
//! # Example
//!
//! ```text
//! # (2 || 2) + 1
//! nested SerialCircuit 2
//!     ParallelCircuit 2 Resistor 2 Resistor 2
//!     Resistor 1
//! 2.0
//! ```

mod case;
mod lexer;
mod parser;

pub use case::{CircuitKind, FixtureCase};
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::circuit::Circuit;
use crate::error::Result;

/// Deepest circuit nesting the parser accepts, counting the outermost circuit as 1.
///
/// Evaluation and teardown recurse once per level, so input deeper than this
/// is rejected with [`NestingTooDeep`](crate::ResistanceError::NestingTooDeep).
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse a fixture string into its cases.
pub fn parse(input: &str) -> Result<Vec<FixtureCase>> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a single circuit specification, e.g. `SerialCircuit 2 Resistor 2 Resistor 3`.
pub fn parse_circuit(input: &str) -> Result<Circuit> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse_single()
}

/// Parse a fixture file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Vec<FixtureCase>> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::ResistanceError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
