//! pf-model: data model for single-line pumped piping systems.
//!
//! Provides the validated value entities the calculators consume:
//! - `Fluid`: constant-property incompressible fluid
//! - `PipeSegment`: straight run of pipe with an `Orientation`
//! - `Fitting`: inline fitting keyed by `FittingKind`, carrying a multiplicity
//! - `PipingSystem`: aggregate root with boundary conditions at points 1 and 2
//!
//! Every constructor checks its invariants and returns `ModelError` on
//! violation, so anything that reaches a calculator is well-formed.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pf_core::units::{kgpm3, m, m3ps, pa, pas};
//! use pf_model::{Fluid, Orientation, PipingSystem};
//!
//! let water = Arc::new(Fluid::new("water", kgpm3(1000.0), pas(1.0e-3), pa(2339.0)).unwrap());
//! let mut system = PipingSystem::new(water, m3ps(0.01), 0.7).unwrap();
//! system.add_segment(m(10.0), Orientation::Horizontal, m(0.1)).unwrap();
//! assert_eq!(system.segments().len(), 1);
//! ```

pub mod error;
pub mod fitting;
pub mod fluid;
pub mod segment;
pub mod system;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use fitting::{Fitting, FittingKind};
pub use fluid::Fluid;
pub use segment::{DEFAULT_MATERIAL, Orientation, PipeSegment};
pub use system::PipingSystem;
