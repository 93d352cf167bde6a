//! Flow kinematics and energy losses (Darcy-Weisbach).

use crate::policy::REPRESENTATIVE_DIAMETER_POLICY;
use pf_catalog::Constants;
use pf_model::{PipeSegment, PipingSystem};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reynolds number at which the friction correlation switches from
/// Hagen-Poiseuille to Blasius.
pub const LAMINAR_LIMIT_RE: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

pub fn flow_regime(reynolds: f64) -> FlowRegime {
    if reynolds < LAMINAR_LIMIT_RE {
        FlowRegime::Laminar
    } else {
        FlowRegime::Turbulent
    }
}

/// Inner cross-section of a circular pipe, π·d²/4 (m²).
///
/// `diameter` must be positive; segments guarantee this at construction.
pub fn cross_section_area(diameter: f64) -> f64 {
    debug_assert!(diameter > 0.0, "diameter must be positive");
    std::f64::consts::PI * diameter.powi(2) / 4.0
}

/// Mean velocity Q/A (m/s).
pub fn velocity(flow_rate: f64, diameter: f64) -> f64 {
    flow_rate / cross_section_area(diameter)
}

/// Darcy friction factor.
///
/// - Re < 2000: f = 64/Re
/// - Re ≥ 2000: f = 0.3164·Re^-0.25 (Blasius, smooth pipe)
///
/// The two branches do not meet at Re = 2000 (0.032 below, ~0.047 above).
pub fn friction_factor(reynolds: f64) -> f64 {
    match flow_regime(reynolds) {
        FlowRegime::Laminar => 64.0 / reynolds,
        FlowRegime::Turbulent => 0.3164 * reynolds.powf(-0.25),
    }
}

/// Kinetic energy per unit weight, v²/(2g) (m).
pub fn velocity_head(velocity: f64, gravity: f64) -> f64 {
    velocity.powi(2) / (2.0 * gravity)
}

/// Flow quantities evaluated once at the representative diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowParameters {
    pub diameter: f64,
    pub area: f64,
    pub velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub regime: FlowRegime,
    pub velocity_head: f64,
}

/// Head losses in metres of fluid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Losses {
    pub major: f64,
    pub minor: f64,
    pub total: f64,
}

impl Losses {
    pub fn new(major: f64, minor: f64) -> Self {
        Self {
            major,
            minor,
            total: major + minor,
        }
    }
}

/// Stateless view over a system for the flow and loss calculations.
#[derive(Debug, Clone, Copy)]
pub struct HydraulicsCalculator<'a> {
    system: &'a PipingSystem,
    gravity: f64,
}

impl<'a> HydraulicsCalculator<'a> {
    /// Use the gravity from `constants` (9.81 m/s² when absent).
    pub fn new(system: &'a PipingSystem, constants: &Constants) -> Self {
        Self::with_gravity(system, constants.gravity())
    }

    pub fn with_gravity(system: &'a PipingSystem, gravity: f64) -> Self {
        Self { system, gravity }
    }

    pub fn system(&self) -> &'a PipingSystem {
        self.system
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// ρ·v·d/μ with the system fluid.
    pub fn reynolds_number(&self, velocity: f64, diameter: f64) -> f64 {
        let fluid = self.system.fluid();
        fluid.density().value * velocity * diameter / fluid.viscosity().value
    }

    pub fn velocity_head(&self, velocity: f64) -> f64 {
        velocity_head(velocity, self.gravity)
    }

    /// Velocity, Reynolds number and friction factor at the representative
    /// diameter, or `None` when the system has no segments.
    pub fn flow_parameters(&self) -> Option<FlowParameters> {
        let diameter = REPRESENTATIVE_DIAMETER_POLICY
            .representative_diameter(self.system)?
            .value;
        let v = velocity(self.system.flow_rate().value, diameter);
        let reynolds = self.reynolds_number(v, diameter);
        let params = FlowParameters {
            diameter,
            area: cross_section_area(diameter),
            velocity: v,
            reynolds,
            friction_factor: friction_factor(reynolds),
            regime: flow_regime(reynolds),
            velocity_head: self.velocity_head(v),
        };
        debug!(
            diameter,
            velocity = params.velocity,
            reynolds = params.reynolds,
            friction_factor = params.friction_factor,
            regime = ?params.regime,
            "flow parameters"
        );
        Some(params)
    }

    /// f·(L/D)·hv for one segment, with the shared f and hv.
    pub fn segment_major_loss(&self, segment: &PipeSegment, params: &FlowParameters) -> f64 {
        params.friction_factor * segment.length_to_diameter() * params.velocity_head
    }

    /// (Σ K·quantity)·hv over every attached fitting.
    pub fn minor_loss(&self, params: &FlowParameters) -> f64 {
        let k_total: f64 = self.system.fittings().map(|f| f.k_total()).sum();
        k_total * params.velocity_head
    }

    /// Major and minor losses for the whole line. All zero without segments.
    pub fn losses(&self) -> Losses {
        match self.flow_parameters() {
            Some(params) => self.losses_with(&params),
            None => Losses::default(),
        }
    }

    pub fn losses_with(&self, params: &FlowParameters) -> Losses {
        let major: f64 = self
            .system
            .segments()
            .iter()
            .map(|segment| self.segment_major_loss(segment, params))
            .sum();
        Losses::new(major, self.minor_loss(params))
    }

    pub fn major_losses(&self) -> f64 {
        self.losses().major
    }

    pub fn minor_losses(&self) -> f64 {
        self.losses().minor
    }

    /// z2 − z1 (m), negative for a descending line.
    pub fn elevation_head(&self) -> f64 {
        self.system.elevation_point2().value - self.system.elevation_point1().value
    }

    /// (P2 − P1)/(ρ·g) (m).
    pub fn pressure_head(&self) -> f64 {
        let dp = self.system.pressure_point2().value - self.system.pressure_point1().value;
        dp / self.rho_g()
    }

    /// Ht = elevation head + pressure head + total losses (m).
    pub fn total_pump_head(&self) -> f64 {
        self.total_pump_head_with(&self.losses())
    }

    pub fn total_pump_head_with(&self, losses: &Losses) -> f64 {
        self.elevation_head() + self.pressure_head() + losses.total
    }

    /// ρ·g, the weight density used to convert pressures to heads.
    pub fn rho_g(&self) -> f64 {
        self.system.fluid().density().value * self.gravity
    }
}
