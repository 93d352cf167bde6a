//! Catalog lookup and loading errors.

use pf_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Fluid '{name}' not found in catalog")]
    FluidNotFound { name: String },

    #[error("Fitting '{kind}' not found in catalog")]
    FittingNotFound { kind: String },

    #[error("Duplicate {what} entry: {key}")]
    Duplicate { what: &'static str, key: String },

    #[error("Invalid reference data: {0}")]
    Model(#[from] ModelError),

    #[error("Invalid constant '{name}': {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("Unsupported catalog file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
