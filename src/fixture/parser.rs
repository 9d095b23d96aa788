//! Recursive-descent parser for the fixture format.

use tracing::{debug, trace};

use super::case::{CircuitKind, FixtureCase};
use super::lexer::{Lexer, Token, TokenKind};
use super::MAX_NESTING_DEPTH;
use crate::circuit::Circuit;
use crate::error::{ResistanceError, Result};

/// Parser for fixture files and single circuit specifications.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    /// Deepest circuit level accepted; the outermost circuit is level 1
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_max_depth(lexer, MAX_NESTING_DEPTH)
    }

    /// Create a parser that rejects circuits nested deeper than `max_depth`.
    pub fn with_max_depth(mut lexer: Lexer<'a>, max_depth: usize) -> Self {
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            max_depth,
        }
    }

    /// Parse every case until end of input.
    pub fn parse(&mut self) -> Result<Vec<FixtureCase>> {
        let mut cases = Vec::new();
        while !self.at_eof() {
            let case = self.parse_case()?;
            debug!(name = %case.name, line = case.line, expected = case.expected, "parsed case");
            cases.push(case);
        }
        Ok(cases)
    }

    /// Parse exactly one circuit specification with nothing trailing.
    pub fn parse_single(&mut self) -> Result<Circuit> {
        let circuit = self.parse_circuit(1)?;
        if !self.at_eof() {
            return Err(ResistanceError::parse(
                self.current.line,
                self.current.column,
                format!("unexpected trailing token '{}'", self.current.text),
            ));
        }
        Ok(circuit)
    }

    fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Consume the current token, failing with `expected` at end of input.
    fn next(&mut self, expected: &str) -> Result<Token> {
        if self.at_eof() {
            return Err(ResistanceError::unexpected_eof(expected));
        }
        let next = self.lexer.next_token();
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn parse_case(&mut self) -> Result<FixtureCase> {
        let name = self.next("case name")?;
        let circuit = self.parse_circuit(1)?;
        let expected = self.next("expected resistance")?.as_value()?;
        Ok(FixtureCase {
            name: name.text,
            circuit,
            expected,
            line: name.line,
        })
    }

    fn parse_circuit(&mut self, depth: usize) -> Result<Circuit> {
        let keyword = self.next("circuit type")?;
        if depth > self.max_depth {
            return Err(ResistanceError::NestingTooDeep {
                limit: self.max_depth,
                line: keyword.line,
                column: keyword.column,
            });
        }
        let kind = CircuitKind::from_keyword(&keyword.text).ok_or_else(|| {
            ResistanceError::unknown_variant(&keyword.text, keyword.line, keyword.column)
        })?;

        match kind {
            CircuitKind::Resistor => {
                let value = self.next("resistor value")?.as_value()?;
                trace!(value, "resistor");
                Circuit::resistor(value)
            }
            CircuitKind::Serial => Ok(Circuit::serial(self.parse_children(depth)?)),
            CircuitKind::Parallel => Ok(Circuit::parallel(self.parse_children(depth)?)),
        }
    }

    fn parse_children(&mut self, depth: usize) -> Result<Vec<Circuit>> {
        let count = self.next("child count")?.as_count()?;
        trace!(count, "composite");
        // Counts come from untrusted input; let the vector grow instead of reserving.
        let mut children = Vec::new();
        for _ in 0..count {
            children.push(self.parse_circuit(depth + 1)?);
        }
        Ok(children)
    }
}
