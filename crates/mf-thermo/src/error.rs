//! Thermodynamic formula errors.

use mf_core::MfError;
use thiserror::Error;

/// Result type for formula evaluation.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised while evaluating the formula chain.
///
/// Physically implausible but finite results (negative mixing ratio,
/// supersaturation) are not errors; see `plausibility`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Input outside the mathematical domain of a formula.
    #[error("Outside formula domain: {what} (value={value})")]
    Domain { what: &'static str, value: f64 },

    /// NaN or infinite input.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Array operands of different lengths.
    #[error("Shape mismatch: expected {expected} elements, got {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// A single element of a field failed.
    #[error("Element {index} failed: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ThermoError>,
    },

    /// Root finding did not reach the requested tolerance.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },

    /// Root finding target lies outside the search bracket.
    #[error("Target {target} not bracketed for {what}")]
    NotBracketed { what: &'static str, target: f64 },

    /// Configuration could not be parsed or is inconsistent.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ThermoError {
    /// The innermost error, looking through `Element` wrappers.
    pub fn root(&self) -> &ThermoError {
        match self {
            ThermoError::Element { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<MfError> for ThermoError {
    fn from(err: MfError) -> Self {
        match err {
            MfError::NonFinite { what, value } => ThermoError::NonFinite { what, value },
            MfError::InvalidArg { what } => ThermoError::InvalidArg { what },
            MfError::Domain { what, value } => ThermoError::Domain { what, value },
        }
    }
}

impl From<ThermoError> for MfError {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::Domain { what, value } => MfError::Domain { what, value },
            ThermoError::NonFinite { what, value } => MfError::NonFinite { what, value },
            ThermoError::InvalidArg { what } => MfError::InvalidArg { what },
            ThermoError::ShapeMismatch { .. } => MfError::InvalidArg {
                what: "field shape",
            },
            ThermoError::Element { source, .. } => MfError::from(*source),
            ThermoError::ConvergenceFailed { what } | ThermoError::NotBracketed { what, .. } => {
                MfError::InvalidArg { what }
            }
            ThermoError::Config { .. } => MfError::InvalidArg {
                what: "configuration",
            },
        }
    }
}
