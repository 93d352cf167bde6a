//! Validation errors raised while constructing model entities.

use pf_core::PfError;
use thiserror::Error;

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Invariant violations detected at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A quantity is outside its physical domain (zero length, negative K, ...).
    #[error("Invalid value: {what}")]
    InvalidValue { what: &'static str },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid orientation '{value}' (expected 'horizontal' or 'vertical')")]
    InvalidOrientation { value: String },

    #[error("Unknown fitting kind '{id}'")]
    UnknownFittingKind { id: String },
}

impl From<PfError> for ModelError {
    fn from(e: PfError) -> Self {
        match e {
            PfError::NonFinite { what, value } => ModelError::NonFinite { what, value },
            PfError::InvalidArg { what } => ModelError::InvalidValue { what },
            PfError::NotFound { key, .. } => ModelError::UnknownFittingKind { id: key },
        }
    }
}

impl From<ModelError> for PfError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidValue { what } => PfError::InvalidArg { what },
            ModelError::NonFinite { what, value } => PfError::NonFinite { what, value },
            ModelError::InvalidOrientation { .. } => PfError::InvalidArg {
                what: "pipe orientation",
            },
            ModelError::UnknownFittingKind { id } => PfError::NotFound {
                what: "fitting kind",
                key: id,
            },
        }
    }
}
