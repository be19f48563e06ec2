use thiserror::Error;

/// Errors raised when game, pattern, or experiment parameters are invalid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a probability in [0, 1] (got {value})")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    #[error("period must be at least 1 (got {value})")]
    NonPositivePeriod { value: i64 },
    #[error("pattern must contain at least one game")]
    EmptyPattern,
    #[error("unknown game label {label:?} in pattern")]
    UnknownLabel { label: char },
}

pub(crate) fn probability(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}
