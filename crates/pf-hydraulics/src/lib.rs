//! pf-hydraulics: hydraulic calculation engine for pumped piping systems.
//!
//! Two stateless calculators borrow a [`pf_model::PipingSystem`]:
//! - [`HydraulicsCalculator`]: velocity, Reynolds number, friction factor,
//!   major/minor losses, elevation and pressure heads, total pump head
//! - [`PumpingCalculator`]: hydraulic and shaft power, suction/discharge
//!   heads, NPSH available, and the [`PumpingResults`] record
//!
//! Neither calculator mutates the system, so one system can be evaluated
//! from several threads at once.
//!
//! # Limitations
//!
//! Velocity and friction factor are evaluated once at the diameter chosen by
//! [`REPRESENTATIVE_DIAMETER_POLICY`] (the first segment) and reused for every
//! segment. The laminar/turbulent switch at Re = 2000 is a hard jump.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pf_catalog::Constants;
//! use pf_core::units::{m, m3ps};
//! use pf_hydraulics::{SuctionLine, calculate};
//! use pf_model::{Fluid, Orientation, PipingSystem};
//!
//! let water = Arc::new(Fluid::from_si("water", 1000.0, 1.0e-3, 2339.0).unwrap());
//! let mut system = PipingSystem::new(water, m3ps(0.01), 0.7)
//!     .unwrap()
//!     .with_elevations(m(2.0), m(8.0))
//!     .unwrap();
//! system.add_segment(m(10.0), Orientation::Horizontal, m(0.1)).unwrap();
//!
//! let results = calculate(&system, &Constants::standard(), &SuctionLine::default());
//! assert!(results.total_pump_head_m > 6.0);
//! ```

pub mod hydraulics;
pub mod policy;
pub mod pumping;
pub mod results;

// Re-exports
pub use hydraulics::{
    FlowParameters, FlowRegime, HydraulicsCalculator, LAMINAR_LIMIT_RE, Losses,
    cross_section_area, flow_regime, friction_factor, velocity, velocity_head,
};
pub use policy::{DiameterPolicy, REPRESENTATIVE_DIAMETER_POLICY};
pub use pumping::{
    DEFAULT_SUCTION_ELEVATION_M, DEFAULT_SUCTION_LENGTH_M, NpshBreakdown, PumpingCalculator,
    SUCTION_FITTING_KINDS, SuctionLine, calculate, is_suction_fitting,
};
pub use results::PumpingResults;
