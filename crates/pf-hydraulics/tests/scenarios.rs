//! Engineering reference scenarios run through the full engine.

use pf_catalog::{BuiltinCatalog, CatalogSource, Constants};
use pf_core::units::{m, m3ps, pa};
use pf_hydraulics::{
    FlowRegime, HydraulicsCalculator, PumpingCalculator, PumpingResults, SuctionLine, calculate,
};
use pf_model::{FittingKind, Fluid, Orientation, PipingSystem};
use std::sync::Arc;

fn water_1000() -> Arc<Fluid> {
    Arc::new(Fluid::from_si("water", 1000.0, 0.001, 2339.0).unwrap())
}

fn single_horizontal_segment() -> PipingSystem {
    let mut system = PipingSystem::new(water_1000(), m3ps(0.01), 0.75)
        .unwrap()
        .with_elevations(m(2.0), m(8.0))
        .unwrap()
        .with_pressures(pa(101_325.0), pa(101_325.0))
        .unwrap();
    system
        .add_segment(m(10.0), Orientation::Horizontal, m(0.1))
        .unwrap();
    system
}

#[test]
fn single_horizontal_segment_operating_point() {
    let system = single_horizontal_segment();
    let constants = Constants::standard();
    let results = calculate(&system, &constants, &SuctionLine::default());

    assert!((results.velocity_m_s - 1.273).abs() < 1e-3);
    assert!((results.reynolds_number - 127_324.0).abs() < 1.0);

    let hydraulics = HydraulicsCalculator::new(&system, &constants);
    assert_eq!(
        hydraulics.flow_parameters().unwrap().regime,
        FlowRegime::Turbulent
    );
    assert!(
        (results.friction_factor - 0.3164 * results.reynolds_number.powf(-0.25)).abs() < 1e-12
    );

    assert_eq!(results.pressure_head_m, 0.0);
    assert_eq!(results.elevation_head_m, 6.0);
    assert!((results.total_pump_head_m - (6.0 + results.total_losses_m)).abs() < 1e-12);
    assert!(results.total_losses_m > 0.0);
}

#[test]
fn level_line_head_equals_losses() {
    let fluid = water_1000();
    let mut system = PipingSystem::new(fluid, m3ps(0.004), 0.6)
        .unwrap()
        .with_elevations(m(3.0), m(3.0))
        .unwrap();
    system
        .add_segment(m(40.0), Orientation::Horizontal, m(0.05))
        .unwrap();
    let catalog = BuiltinCatalog.load().unwrap();
    system.add_fitting(
        &catalog
            .fitting(FittingKind::Elbow90LongRadius)
            .unwrap()
            .with_quantity(4),
    ).unwrap();

    let results = calculate(&system, catalog.constants(), &SuctionLine::default());
    assert!(results.total_losses_m > 0.0);
    assert_eq!(results.total_pump_head_m, results.total_losses_m);
}

#[test]
fn npsh_is_reduced_by_suction_losses() {
    let mut system = single_horizontal_segment();
    let catalog = BuiltinCatalog.load().unwrap();
    system.add_fitting(&catalog.fitting(FittingKind::TankInlet).unwrap()).unwrap();
    system.add_fitting(&catalog.fitting(FittingKind::YStrainer).unwrap()).unwrap();

    let suction = SuctionLine::new(5.0, 1.0).unwrap();
    let results = calculate(&system, &Constants::standard(), &suction);

    let rho_g = 1000.0 * 9.81;
    let upper_bound = 101_325.0 / rho_g - 2339.0 / rho_g + 1.0;
    assert!(results.npsh_available_m < upper_bound);
    assert!(results.suction_losses_m > 0.0);
    assert!((results.initial_pressure_head_m - 101_325.0 / rho_g).abs() < 1e-9);
    assert!((results.vapor_pressure_head_m - 2339.0 / rho_g).abs() < 1e-9);
}

#[test]
fn empty_system_reduces_to_static_heads() {
    let system = PipingSystem::new(water_1000(), m3ps(0.01), 0.7)
        .unwrap()
        .with_elevations(m(0.0), m(15.0))
        .unwrap()
        .with_pressures(pa(101_325.0), pa(300_000.0))
        .unwrap();

    let results = calculate(&system, &Constants::standard(), &SuctionLine::default());

    assert_eq!(results.velocity_m_s, 0.0);
    assert_eq!(results.reynolds_number, 0.0);
    assert_eq!(results.friction_factor, 0.0);
    assert_eq!(results.major_losses_m, 0.0);
    assert_eq!(results.minor_losses_m, 0.0);
    assert_eq!(results.total_losses_m, 0.0);
    assert_eq!(results.suction_losses_m, 0.0);
    assert_eq!(
        results.total_pump_head_m,
        results.elevation_head_m + results.pressure_head_m
    );
    assert!(results.pump_power_w > 0.0);
}

#[test]
fn descending_line_gives_negative_power() {
    let mut system = PipingSystem::new(water_1000(), m3ps(0.002), 0.8)
        .unwrap()
        .with_elevations(m(30.0), m(0.0))
        .unwrap();
    system
        .add_segment(m(5.0), Orientation::Vertical, m(0.1))
        .unwrap();

    let results = calculate(&system, &Constants::standard(), &SuctionLine::default());
    assert!(results.total_pump_head_m < 0.0);
    assert!(results.hydraulic_power_w < 0.0);
    assert!(results.pump_power_w < results.hydraulic_power_w);
}

#[test]
fn laminar_oil_line() {
    let catalog = BuiltinCatalog.load().unwrap();
    let oil = catalog.fluid("light_oil").unwrap();
    let mut system = PipingSystem::new(oil, m3ps(0.0005), 0.5).unwrap();
    system
        .add_segment(m(20.0), Orientation::Horizontal, m(0.05))
        .unwrap();

    let results = calculate(&system, catalog.constants(), &SuctionLine::default());
    assert!(results.reynolds_number < 2000.0);
    assert!((results.friction_factor - 64.0 / results.reynolds_number).abs() < 1e-12);
}

#[test]
fn results_are_idempotent() {
    let mut system = single_horizontal_segment();
    let catalog = BuiltinCatalog.load().unwrap();
    system.add_fitting(&catalog.fitting(FittingKind::GateValveOpen).unwrap()).unwrap();
    system.add_segment(m(6.0), Orientation::Vertical, m(0.08)).unwrap();

    let calc = PumpingCalculator::new(&system, catalog.constants());
    let first: PumpingResults = calc.results(&SuctionLine::default());
    let second = calc.results(&SuctionLine::default());
    assert_eq!(first, second);
    assert_eq!(
        first,
        calculate(&system, catalog.constants(), &SuctionLine::default())
    );
}

#[test]
fn concurrent_calculations_share_one_system() {
    let system = Arc::new(single_horizontal_segment());
    let expected = calculate(&system, &Constants::standard(), &SuctionLine::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let system = Arc::clone(&system);
            std::thread::spawn(move || {
                calculate(&system, &Constants::standard(), &SuctionLine::default())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
