//! Choice of the diameter used for the whole-line flow parameters.

use pf_core::units::Length;
use pf_model::PipingSystem;

/// How the single diameter used for velocity, Reynolds number and friction
/// factor is picked from a multi-segment system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiameterPolicy {
    /// Diameter of the first segment, reused for every segment's loss term.
    FirstSegment,
}

/// The policy applied by the calculators.
pub const REPRESENTATIVE_DIAMETER_POLICY: DiameterPolicy = DiameterPolicy::FirstSegment;

impl DiameterPolicy {
    /// `None` for a system without segments.
    pub fn representative_diameter(self, system: &PipingSystem) -> Option<Length> {
        match self {
            DiameterPolicy::FirstSegment => system.segments().first().map(|s| s.diameter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{m, m3ps};
    use pf_model::{Fluid, Orientation};
    use std::sync::Arc;

    #[test]
    fn first_segment_wins() {
        let fluid = Arc::new(Fluid::from_si("water", 1000.0, 1e-3, 0.0).unwrap());
        let mut sys = PipingSystem::new(fluid, m3ps(0.01), 0.7).unwrap();
        assert!(REPRESENTATIVE_DIAMETER_POLICY
            .representative_diameter(&sys)
            .is_none());

        sys.add_segment(m(1.0), Orientation::Vertical, m(0.08)).unwrap();
        sys.add_segment(m(1.0), Orientation::Horizontal, m(0.15)).unwrap();
        let d = REPRESENTATIVE_DIAMETER_POLICY
            .representative_diameter(&sys)
            .unwrap();
        assert_eq!(d.value, 0.08);
    }
}
