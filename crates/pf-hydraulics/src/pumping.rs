//! Pump sizing: power, suction/discharge heads and NPSH available.

use crate::hydraulics::{HydraulicsCalculator, Losses};
use crate::results::PumpingResults;
use pf_catalog::Constants;
use pf_core::PfResult;
use pf_core::numeric::{ensure_finite, ensure_non_negative};
use pf_model::{FittingKind, PipingSystem};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_SUCTION_LENGTH_M: f64 = 5.0;
pub const DEFAULT_SUCTION_ELEVATION_M: f64 = 1.0;

/// Fitting kinds counted as part of the suction line for NPSH.
///
/// Fixed by kind; the position of a fitting along the line is not known.
pub const SUCTION_FITTING_KINDS: [FittingKind; 8] = [
    FittingKind::TankInlet,
    FittingKind::Elbow90LongRadius,
    FittingKind::Elbow90ShortRadius,
    FittingKind::Elbow45,
    FittingKind::TeeStraight,
    FittingKind::TeeBranch,
    FittingKind::GateValveOpen,
    FittingKind::YStrainer,
];

pub fn is_suction_fitting(kind: FittingKind) -> bool {
    SUCTION_FITTING_KINDS.contains(&kind)
}

/// Suction-side geometry supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuctionLine {
    length_m: f64,
    fluid_elevation_m: f64,
}

impl SuctionLine {
    /// `length_m` is the suction pipe length, `fluid_elevation_m` the height
    /// of the suction free surface above the pump (negative for a lift).
    pub fn new(length_m: f64, fluid_elevation_m: f64) -> PfResult<Self> {
        ensure_non_negative(length_m, "suction line length cannot be negative")?;
        ensure_finite(fluid_elevation_m, "suction fluid elevation")?;
        Ok(Self {
            length_m,
            fluid_elevation_m,
        })
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn fluid_elevation_m(&self) -> f64 {
        self.fluid_elevation_m
    }
}

impl Default for SuctionLine {
    fn default() -> Self {
        Self {
            length_m: DEFAULT_SUCTION_LENGTH_M,
            fluid_elevation_m: DEFAULT_SUCTION_ELEVATION_M,
        }
    }
}

/// Terms of NPSHa = P1/(ρg) − Pv/(ρg) + z_s − h_s, all in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpshBreakdown {
    pub initial_pressure_head: f64,
    pub vapor_pressure_head: f64,
    pub suction_elevation: f64,
    pub suction_losses: f64,
    pub npsh_available: f64,
}

/// Stateless pump sizing on top of [`HydraulicsCalculator`].
#[derive(Debug, Clone, Copy)]
pub struct PumpingCalculator<'a> {
    hydraulics: HydraulicsCalculator<'a>,
}

impl<'a> PumpingCalculator<'a> {
    pub fn new(system: &'a PipingSystem, constants: &Constants) -> Self {
        Self::from_hydraulics(HydraulicsCalculator::new(system, constants))
    }

    pub fn from_hydraulics(hydraulics: HydraulicsCalculator<'a>) -> Self {
        Self { hydraulics }
    }

    pub fn hydraulics(&self) -> &HydraulicsCalculator<'a> {
        &self.hydraulics
    }

    fn system(&self) -> &'a PipingSystem {
        self.hydraulics.system()
    }

    /// Wh = Q·ρ·g·Ht (W). Negative heads give negative power.
    pub fn hydraulic_power(&self, total_head: f64) -> f64 {
        self.system().flow_rate().value * self.hydraulics.rho_g() * total_head
    }

    /// Shaft power Wh/η (W).
    pub fn pump_power(&self, hydraulic_power: f64) -> f64 {
        hydraulic_power / self.system().pump_efficiency()
    }

    /// Losses of the suction line alone.
    ///
    /// Uses the representative friction factor and velocity head with the
    /// caller's suction length, and only the fittings in
    /// [`SUCTION_FITTING_KINDS`]. Zero for a system without segments.
    pub fn suction_losses(&self, suction: &SuctionLine) -> Losses {
        let Some(params) = self.hydraulics.flow_parameters() else {
            return Losses::default();
        };
        let major =
            params.friction_factor * (suction.length_m / params.diameter) * params.velocity_head;
        let k_suction: f64 = self
            .system()
            .fittings()
            .filter(|f| is_suction_fitting(f.kind()))
            .map(|f| f.k_total())
            .sum();
        Losses::new(major, k_suction * params.velocity_head)
    }

    pub fn npsh(&self, suction: &SuctionLine) -> NpshBreakdown {
        let system = self.system();
        let rho_g = self.hydraulics.rho_g();
        let initial_pressure_head = system.pressure_point1().value / rho_g;
        let vapor_pressure_head = system.fluid().vapor_pressure().value / rho_g;
        let suction_losses = self.suction_losses(suction).total;
        let npsh_available = initial_pressure_head - vapor_pressure_head
            + suction.fluid_elevation_m
            - suction_losses;

        NpshBreakdown {
            initial_pressure_head,
            vapor_pressure_head,
            suction_elevation: suction.fluid_elevation_m,
            suction_losses,
            npsh_available,
        }
    }

    pub fn npsh_available(&self, suction: &SuctionLine) -> f64 {
        self.npsh(suction).npsh_available
    }

    /// Total energy heads at points 1 and 2: z + P/(ρg).
    pub fn suction_discharge_heads(&self) -> (f64, f64) {
        let system = self.system();
        let rho_g = self.hydraulics.rho_g();
        let suction = system.elevation_point1().value + system.pressure_point1().value / rho_g;
        let discharge = system.elevation_point2().value + system.pressure_point2().value / rho_g;
        (suction, discharge)
    }

    /// Assemble the full result record.
    pub fn results(&self, suction: &SuctionLine) -> PumpingResults {
        let system = self.system();
        if !system.is_constant_diameter() {
            warn!(
                segments = system.segments().len(),
                "segment diameters differ; flow parameters use the first segment's diameter"
            );
        }

        let params = self.hydraulics.flow_parameters();
        let losses = params
            .as_ref()
            .map(|p| self.hydraulics.losses_with(p))
            .unwrap_or_default();
        let elevation_head = self.hydraulics.elevation_head();
        let pressure_head = self.hydraulics.pressure_head();
        let total_head = self.hydraulics.total_pump_head_with(&losses);
        let (suction_head, discharge_head) = self.suction_discharge_heads();
        let npsh = self.npsh(suction);
        let hydraulic_power = self.hydraulic_power(total_head);
        let pump_power = self.pump_power(hydraulic_power);

        debug!(
            total_head,
            npsh_available = npsh.npsh_available,
            pump_power,
            "pumping results"
        );

        PumpingResults {
            velocity_m_s: params.map_or(0.0, |p| p.velocity),
            reynolds_number: params.map_or(0.0, |p| p.reynolds),
            friction_factor: params.map_or(0.0, |p| p.friction_factor),
            major_losses_m: losses.major,
            minor_losses_m: losses.minor,
            total_losses_m: losses.total,
            elevation_head_m: elevation_head,
            pressure_head_m: pressure_head,
            total_pump_head_m: total_head,
            suction_head_m: suction_head,
            discharge_head_m: discharge_head,
            npsh_available_m: npsh.npsh_available,
            initial_pressure_head_m: npsh.initial_pressure_head,
            vapor_pressure_head_m: npsh.vapor_pressure_head,
            suction_fluid_elevation_m: npsh.suction_elevation,
            suction_losses_m: npsh.suction_losses,
            hydraulic_power_w: hydraulic_power,
            pump_power_w: pump_power,
            hydraulic_power_kw: hydraulic_power / 1000.0,
            pump_power_kw: pump_power / 1000.0,
        }
    }
}

/// Run the whole engine on one system.
pub fn calculate(
    system: &PipingSystem,
    constants: &Constants,
    suction: &SuctionLine,
) -> PumpingResults {
    PumpingCalculator::new(system, constants).results(suction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use pf_core::units::{m, m3ps, pa};
    use pf_model::{Fitting, Fluid, Orientation};
    use std::sync::Arc;

    const TOL: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    };

    fn water() -> Arc<Fluid> {
        Arc::new(Fluid::from_si("water", 1000.0, 1.0e-3, 2339.0).unwrap())
    }

    fn system_with_line() -> PipingSystem {
        let mut sys = PipingSystem::new(water(), m3ps(0.01), 0.7)
            .unwrap()
            .with_elevations(m(2.0), m(8.0))
            .unwrap();
        sys.add_segment(m(10.0), Orientation::Horizontal, m(0.1))
            .unwrap();
        sys
    }

    fn fitting(kind: FittingKind, k: f64) -> Fitting {
        Fitting::new(kind, k, m(0.0), "", "").unwrap()
    }

    #[test]
    fn power_formulas() {
        let sys = system_with_line();
        let calc = PumpingCalculator::new(&sys, &Constants::standard());
        let wh = calc.hydraulic_power(10.0);
        assert!(nearly_equal(wh, 0.01 * 1000.0 * 9.81 * 10.0, TOL));
        assert!(nearly_equal(calc.pump_power(wh), wh / 0.7, TOL));
    }

    #[test]
    fn negative_head_is_not_clamped() {
        let sys = system_with_line();
        let calc = PumpingCalculator::new(&sys, &Constants::standard());
        assert!(calc.hydraulic_power(-3.0) < 0.0);
        assert!(calc.pump_power(calc.hydraulic_power(-3.0)) < calc.hydraulic_power(-3.0));
    }

    #[test]
    fn suction_allowlist() {
        assert!(is_suction_fitting(FittingKind::TankInlet));
        assert!(is_suction_fitting(FittingKind::YStrainer));
        assert!(!is_suction_fitting(FittingKind::TankOutlet));
        assert!(!is_suction_fitting(FittingKind::GlobeValveOpen));
        assert!(!is_suction_fitting(FittingKind::SwingCheckValve));
        assert!(!is_suction_fitting(FittingKind::SuddenExpansion));
    }

    #[test]
    fn suction_losses_ignore_discharge_fittings() {
        let mut sys = system_with_line();
        sys.add_fitting(&fitting(FittingKind::TankInlet, 0.5)).unwrap();
        sys.add_fitting(&fitting(FittingKind::GlobeValveOpen, 10.0)).unwrap();
        sys.add_fitting(&fitting(FittingKind::SwingCheckValve, 2.0)).unwrap();

        let calc = PumpingCalculator::new(&sys, &Constants::standard());
        let params = calc.hydraulics().flow_parameters().unwrap();
        let losses = calc.suction_losses(&SuctionLine::default());

        assert!(nearly_equal(losses.minor, 0.5 * params.velocity_head, TOL));
        let expected_major = params.friction_factor * (5.0 / 0.1) * params.velocity_head;
        assert!(nearly_equal(losses.major, expected_major, TOL));
    }

    #[test]
    fn npsh_terms() {
        let sys = system_with_line();
        let calc = PumpingCalculator::new(&sys, &Constants::standard());
        let suction = SuctionLine::default();
        let n = calc.npsh(&suction);

        assert!(nearly_equal(n.initial_pressure_head, 101_325.0 / 9810.0, TOL));
        assert!(nearly_equal(n.vapor_pressure_head, 2339.0 / 9810.0, TOL));
        assert_eq!(n.suction_elevation, 1.0);
        assert!(n.suction_losses > 0.0);
        assert!(nearly_equal(
            n.npsh_available,
            n.initial_pressure_head - n.vapor_pressure_head + 1.0 - n.suction_losses,
            TOL
        ));
    }

    #[test]
    fn empty_system_npsh_has_no_losses() {
        let sys = PipingSystem::new(water(), m3ps(0.01), 0.7).unwrap();
        let calc = PumpingCalculator::new(&sys, &Constants::standard());
        let n = calc.npsh(&SuctionLine::new(12.0, -0.5).unwrap());
        assert_eq!(n.suction_losses, 0.0);
        assert!(nearly_equal(
            n.npsh_available,
            n.initial_pressure_head - n.vapor_pressure_head - 0.5,
            TOL
        ));
    }

    #[test]
    fn suction_line_validation() {
        assert!(SuctionLine::new(-1.0, 1.0).is_err());
        assert!(SuctionLine::new(1.0, f64::NAN).is_err());
        let s = SuctionLine::new(0.0, -2.0).unwrap();
        assert_eq!(s.length_m(), 0.0);
        assert_eq!(s.fluid_elevation_m(), -2.0);
        let d = SuctionLine::default();
        assert_eq!((d.length_m(), d.fluid_elevation_m()), (5.0, 1.0));
    }

    #[test]
    fn suction_and_discharge_heads() {
        let sys = system_with_line()
            .with_pressures(pa(101_325.0), pa(196_200.0))
            .unwrap();
        let calc = PumpingCalculator::new(&sys, &Constants::standard());
        let (hs, hd) = calc.suction_discharge_heads();
        assert!(nearly_equal(hs, 2.0 + 101_325.0 / 9810.0, TOL));
        assert!(nearly_equal(hd, 8.0 + 20.0, TOL));
    }

    #[test]
    fn results_are_consistent() {
        let mut sys = system_with_line();
        sys.add_fitting(&fitting(FittingKind::Elbow45, 0.35).with_quantity(2)).unwrap();
        let r = calculate(&sys, &Constants::standard(), &SuctionLine::default());

        assert!(nearly_equal(r.total_losses_m, r.major_losses_m + r.minor_losses_m, TOL));
        assert!(nearly_equal(
            r.total_pump_head_m,
            r.elevation_head_m + r.pressure_head_m + r.total_losses_m,
            TOL
        ));
        assert!(nearly_equal(r.hydraulic_power_kw * 1000.0, r.hydraulic_power_w, TOL));
        assert!(nearly_equal(r.pump_power_w, r.hydraulic_power_w / 0.7, TOL));
        assert_eq!(r.suction_fluid_elevation_m, 1.0);
    }

    #[test]
    fn custom_gravity_flows_through() {
        let sys = system_with_line();
        let mut constants = Constants::new();
        constants.insert(pf_catalog::GRAVITY_KEY, 10.0);
        let r = calculate(&sys, &constants, &SuctionLine::default());
        assert!(nearly_equal(r.initial_pressure_head_m, 101_325.0 / 10_000.0, TOL));
    }
}
