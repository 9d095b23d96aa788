//! Leaf resistor.

use crate::error::{ResistanceError, Result};

/// An ideal resistor with a fixed, non-negative value in ohms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    value: f64,
}

impl Resistor {
    /// Create a new resistor.
    ///
    /// Negative values (and NaN) are rejected; the value is never clamped.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || value < 0.0 {
            return Err(ResistanceError::InvalidArgument { value });
        }
        Ok(Self { value })
    }

    /// The resistance passed at construction.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the resistance. Exact passthrough of [`value`](Self::value).
    pub fn resistance(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_is_exact() {
        for value in [0.0, 1e-12, 0.1, 0.3, 4.7e3, 1e300, f64::INFINITY] {
            let r = Resistor::new(value).unwrap();
            assert_eq!(r.resistance().to_bits(), value.to_bits());
            assert_eq!(r.value(), value);
        }
    }

    #[test]
    fn test_negative_rejected() {
        for value in [-1.0, -1e-300, f64::NEG_INFINITY] {
            let err = Resistor::new(value).unwrap_err();
            assert!(matches!(err, ResistanceError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Resistor::new(f64::NAN).is_err());
    }

    #[test]
    fn test_negative_zero_accepted() {
        assert!(Resistor::new(-0.0).is_ok());
    }
}
