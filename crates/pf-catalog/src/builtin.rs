//! Reference data compiled into the crate.

use crate::catalog::{Catalog, CatalogSource};
use crate::constants::Constants;
use crate::error::CatalogResult;
use crate::file::{CatalogFile, FittingRecord, FluidRecord};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
struct FluidRow {
    name: &'static str,
    density_kg_m3: f64,
    viscosity_pa_s: f64,
    vapor_pressure_pa: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FittingRow {
    kind: &'static str,
    k: f64,
    equivalent_length_mm: f64,
    standard: &'static str,
}

const FLUIDS: [FluidRow; 5] = [
    FluidRow {
        name: "water_20c",
        density_kg_m3: 998.2,
        viscosity_pa_s: 1.002e-3,
        vapor_pressure_pa: 2339.0,
    },
    FluidRow {
        name: "water_60c",
        density_kg_m3: 983.2,
        viscosity_pa_s: 4.67e-4,
        vapor_pressure_pa: 19_946.0,
    },
    FluidRow {
        name: "seawater_20c",
        density_kg_m3: 1025.0,
        viscosity_pa_s: 1.08e-3,
        vapor_pressure_pa: 2300.0,
    },
    FluidRow {
        name: "ethylene_glycol_50",
        density_kg_m3: 1070.0,
        viscosity_pa_s: 3.8e-3,
        vapor_pressure_pa: 1200.0,
    },
    FluidRow {
        name: "light_oil",
        density_kg_m3: 850.0,
        viscosity_pa_s: 3.0e-2,
        vapor_pressure_pa: 500.0,
    },
];

// Typical K values for screwed/welded fittings around DN50-DN100.
const FITTINGS: [FittingRow; 14] = [
    FittingRow {
        kind: "tank_inlet",
        k: 0.5,
        equivalent_length_mm: 1500.0,
        standard: "Crane TP-410",
    },
    FittingRow {
        kind: "tank_outlet",
        k: 1.0,
        equivalent_length_mm: 3000.0,
        standard: "Crane TP-410",
    },
    FittingRow {
        kind: "elbow_90_long_radius",
        k: 0.45,
        equivalent_length_mm: 1500.0,
        standard: "ASME B16.9",
    },
    FittingRow {
        kind: "elbow_90_short_radius",
        k: 0.75,
        equivalent_length_mm: 2500.0,
        standard: "ASME B16.9",
    },
    FittingRow {
        kind: "elbow_45",
        k: 0.35,
        equivalent_length_mm: 1000.0,
        standard: "ASME B16.9",
    },
    FittingRow {
        kind: "tee_straight",
        k: 0.4,
        equivalent_length_mm: 1200.0,
        standard: "ASME B16.9",
    },
    FittingRow {
        kind: "tee_branch",
        k: 1.8,
        equivalent_length_mm: 5500.0,
        standard: "ASME B16.9",
    },
    FittingRow {
        kind: "gate_valve_open",
        k: 0.17,
        equivalent_length_mm: 500.0,
        standard: "API 600",
    },
    FittingRow {
        kind: "globe_valve_open",
        k: 10.0,
        equivalent_length_mm: 30_000.0,
        standard: "ASME B16.34",
    },
    FittingRow {
        kind: "ball_check_valve",
        k: 4.5,
        equivalent_length_mm: 13_500.0,
        standard: "ASME B16.34",
    },
    FittingRow {
        kind: "swing_check_valve",
        k: 2.0,
        equivalent_length_mm: 6000.0,
        standard: "API 594",
    },
    FittingRow {
        kind: "y_strainer",
        k: 2.5,
        equivalent_length_mm: 7500.0,
        standard: "ASME B16.34",
    },
    FittingRow {
        kind: "sudden_contraction",
        k: 0.5,
        equivalent_length_mm: 1500.0,
        standard: "Crane TP-410",
    },
    FittingRow {
        kind: "sudden_expansion",
        k: 1.0,
        equivalent_length_mm: 3000.0,
        standard: "Crane TP-410",
    },
];

const MANUFACTURER: &str = "Generic";

/// The built-in reference data as a file-shaped document.
pub fn builtin_catalog_file() -> CatalogFile {
    CatalogFile {
        constants: Constants::standard(),
        fluids: FLUIDS
            .iter()
            .map(|row| FluidRecord {
                name: row.name.to_string(),
                density_kg_m3: row.density_kg_m3,
                viscosity_pa_s: row.viscosity_pa_s,
                vapor_pressure_pa: row.vapor_pressure_pa,
            })
            .collect(),
        fittings: FITTINGS
            .iter()
            .map(|row| FittingRecord {
                kind: row.kind.to_string(),
                k: row.k,
                equivalent_length_mm: row.equivalent_length_mm,
                standard: row.standard.to_string(),
                manufacturer: MANUFACTURER.to_string(),
            })
            .collect(),
    }
}

/// Build the built-in catalog.
pub fn builtin_catalog() -> CatalogResult<Catalog> {
    debug!("loading built-in catalog");
    builtin_catalog_file().into_catalog()
}

/// [`CatalogSource`] backed by the compiled-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> CatalogResult<Catalog> {
        builtin_catalog()
    }
}
