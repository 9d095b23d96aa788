//! Evaluates fixture cases and compares them against their expected resistance.

use tracing::{debug, warn};

use crate::fixture::FixtureCase;
use crate::DEFAULT_TOLERANCE;

/// Configuration for a fixture run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Maximum absolute difference between expected and actual resistance (ohms).
    pub tolerance: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RunnerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison tolerance (in ohms).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Result of evaluating one case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub name: String,
    pub line: usize,
    pub expected: f64,
    pub actual: f64,
    pub passed: bool,
}

/// Outcomes of a fixture run, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    /// Number of passing cases.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of failing cases.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Check if every case passed. True for an empty run.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Iterate over the failing cases.
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Compare two resistances. Infinities only match an infinity of the same sign.
pub fn within_tolerance(expected: f64, actual: f64, tolerance: f64) -> bool {
    if expected.is_infinite() || actual.is_infinite() {
        return expected == actual;
    }
    (expected - actual).abs() <= tolerance
}

/// Evaluate a single case.
pub fn run_case(case: &FixtureCase, config: &RunnerConfig) -> CaseOutcome {
    let actual = case.circuit.resistance();
    let passed = within_tolerance(case.expected, actual, config.tolerance);

    if passed {
        debug!(name = %case.name, actual, "case passed");
    } else {
        warn!(name = %case.name, expected = case.expected, actual, "wrong value for circuit resistance");
    }

    CaseOutcome {
        name: case.name.clone(),
        line: case.line,
        expected: case.expected,
        actual,
        passed,
    }
}

/// Evaluate every case.
pub fn run_cases(cases: &[FixtureCase], config: &RunnerConfig) -> Report {
    Report {
        outcomes: cases.iter().map(|case| run_case(case, config)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    const BUNDLED: &str = include_str!("../fixtures/circuits.txt");

    #[test]
    fn test_bundled_fixtures_pass() {
        let cases = fixture::parse(BUNDLED).unwrap();
        assert_eq!(cases.len(), 17);

        let report = run_cases(&cases, &RunnerConfig::new());
        for failure in report.failures() {
            panic!(
                "{}: expected {}, got {}",
                failure.name, failure.expected, failure.actual
            );
        }
        assert!(report.all_passed());
        assert_eq!(report.passed(), 17);
    }

    #[test]
    fn test_failing_case_reported() {
        let cases = fixture::parse("ok Resistor 1 1\nwrong SerialCircuit 2 Resistor 1 Resistor 1 3").unwrap();
        let report = run_cases(&cases, &RunnerConfig::default());
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());

        let failure = report.failures().next().unwrap();
        assert_eq!(failure.name, "wrong");
        assert_eq!(failure.line, 2);
        assert_eq!(failure.actual, 2.0);
    }

    #[test]
    fn test_tolerance_config() {
        let cases = fixture::parse("third ParallelCircuit 3 Resistor 1 Resistor 1 Resistor 1 0.33").unwrap();
        assert!(!run_cases(&cases, &RunnerConfig::new()).all_passed());
        assert!(run_cases(&cases, &RunnerConfig::new().with_tolerance(0.01)).all_passed());
    }

    #[test]
    fn test_within_tolerance_infinity() {
        assert!(within_tolerance(f64::INFINITY, f64::INFINITY, 1e-4));
        assert!(!within_tolerance(1e300, f64::INFINITY, 1e-4));
        assert!(!within_tolerance(f64::INFINITY, f64::NEG_INFINITY, 1e-4));
        assert!(within_tolerance(1.0, 1.00005, 1e-4));
        assert!(!within_tolerance(1.0, f64::NAN, 1e-4));
    }

    #[test]
    fn test_empty_parallel_against_inf() {
        let cases = fixture::parse("open ParallelCircuit 0 Infinity\nopen_short ParallelCircuit 0 inf").unwrap();
        let report = run_cases(&cases, &RunnerConfig::new());
        assert!(report.all_passed());
        assert_eq!(report.outcomes[0].actual, f64::INFINITY);

        let cases = fixture::parse("not_open ParallelCircuit 0 1e300").unwrap();
        assert!(!run_cases(&cases, &RunnerConfig::new()).all_passed());
    }

    #[test]
    fn test_empty_report() {
        let report = run_cases(&[], &RunnerConfig::new());
        assert!(report.all_passed());
        assert_eq!(report.failed(), 0);
    }
}
