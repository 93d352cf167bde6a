//! pf-catalog: reference data for pumpflow.
//!
//! Supplies the three lookup tables the engine is fed from:
//! - physical constants (`Constants`), with documented fallbacks
//! - fitting templates keyed by `FittingKind`
//! - fluids keyed by name
//!
//! Data comes from a [`CatalogSource`]: the built-in table compiled into the
//! crate, or a YAML/JSON reference-data file. The returned [`Catalog`] is
//! owned by the caller; the calculators never go back to the source.

pub mod builtin;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod file;

// Re-exports
pub use builtin::{BuiltinCatalog, builtin_catalog, builtin_catalog_file};
pub use catalog::{Catalog, CatalogSource};
pub use constants::{ATMOSPHERIC_PRESSURE_KEY, Constants, GRAVITY_KEY};
pub use error::{CatalogError, CatalogResult};
pub use file::{CatalogFile, FileCatalog, FittingRecord, FluidRecord};
