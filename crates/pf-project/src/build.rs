//! Turn a validated description into model entities.

use crate::ProjectResult;
use crate::schema::SystemDef;
use crate::validate::validate_system_def;
use pf_catalog::Catalog;
use pf_core::units::{m, m3ps, pa};
use pf_hydraulics::SuctionLine;
use pf_model::{PipeSegment, PipingSystem};
use tracing::debug;

/// Resolve the fluid and fittings through `catalog` and assemble the system.
///
/// # Errors
/// Validation errors, unknown fluid or fitting identifiers, and entity
/// invariant violations.
pub fn build_system(def: &SystemDef, catalog: &Catalog) -> ProjectResult<PipingSystem> {
    validate_system_def(def)?;

    let fluid = catalog.fluid(&def.fluid)?;
    let atmospheric = catalog.constants().atmospheric_pressure();
    let p1 = def.pressure_point1_pa.unwrap_or(atmospheric);
    let p2 = def.pressure_point2_pa.unwrap_or(atmospheric);
    let mut system = PipingSystem::new(fluid, m3ps(def.flow_rate_m3_s), def.pump_efficiency)?
        .with_elevations(m(def.elevation_point1_m), m(def.elevation_point2_m))?
        .with_pressures(pa(p1), pa(p2))?;

    for seg in &def.segments {
        let segment = PipeSegment::new(m(seg.length_m), seg.orientation, m(seg.diameter_m))?
            .with_material(seg.material.clone());
        system.push_segment(segment);
    }

    for fitting_ref in &def.fittings {
        let template = catalog.fitting_by_id(&fitting_ref.kind)?;
        system.add_fitting(&template.with_quantity(fitting_ref.quantity))?;
    }

    debug!(
        name = %def.name,
        segments = system.segments().len(),
        fittings = system.fittings().count(),
        "system assembled"
    );
    Ok(system)
}

/// Suction parameters of the description, defaults when absent.
pub fn suction_line(def: &SystemDef) -> ProjectResult<SuctionLine> {
    match def.suction {
        Some(s) => Ok(SuctionLine::new(s.length_m, s.fluid_elevation_m)?),
        None => Ok(SuctionLine::default()),
    }
}
