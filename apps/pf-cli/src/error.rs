//! Error type for the command-line front end.

use pf_catalog::CatalogError;
use pf_core::PfError;
use pf_project::ProjectError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Project(#[from] ProjectError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Argument(#[from] PfError),

    #[error("Failed to render output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}
