//! Configuration errors.
//!
//! The pipeline itself is total: out-of-range inputs are clamped, never rejected.
//! The only fallible surface is building a model from a custom config, where a
//! coefficient outside its meaningful range would silently break the decay maths.

/// A tuning coefficient was outside its allowed range.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A coefficient that must lie in [0.0, 1.0] did not.
    #[error("`{name}` must be within [0, 1], got {value}")]
    OutOfUnitRange {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A rate or threshold that must be non-negative and finite was not.
    #[error("`{name}` must be finite and non-negative, got {value}")]
    Negative {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Stage thresholds must be strictly increasing.
    #[error("trust stage thresholds must be strictly increasing")]
    UnorderedStages,
}

/// Check that `value` lies in [0.0, 1.0].
pub(crate) fn unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

/// Check that `value` is finite and >= 0.0.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
