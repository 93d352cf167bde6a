//! pf-project: system description file format, validation and assembly.

pub mod build;
pub mod schema;
pub mod validate;

pub use build::{build_system, suction_line};
pub use schema::*;
pub use validate::{ValidationError, validate_system_def};

use pf_catalog::CatalogError;
use pf_core::PfError;
use pf_model::ModelError;
use std::path::Path;
use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid argument: {0}")]
    Core(#[from] PfError),

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<SystemDef> {
    let content = std::fs::read_to_string(path)?;
    let def: SystemDef = serde_yaml::from_str(&content)?;
    validate_system_def(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &Path, def: &SystemDef) -> ProjectResult<()> {
    validate_system_def(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<SystemDef> {
    let content = std::fs::read_to_string(path)?;
    let def: SystemDef = serde_json::from_str(&content)?;
    validate_system_def(&def)?;
    Ok(def)
}

pub fn save_json(path: &Path, def: &SystemDef) -> ProjectResult<()> {
    validate_system_def(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a system description, choosing the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<SystemDef> {
    debug!(path = %path.display(), "loading system description");
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml") | Some("yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
