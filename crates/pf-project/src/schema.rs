//! System description schema.

use pf_hydraulics::{DEFAULT_SUCTION_ELEVATION_M, DEFAULT_SUCTION_LENGTH_M};
use pf_model::{DEFAULT_MATERIAL, Orientation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    pub name: String,
    /// Catalog name of the fluid.
    pub fluid: String,
    pub flow_rate_m3_s: f64,
    #[serde(default = "default_pump_efficiency")]
    pub pump_efficiency: f64,
    #[serde(default)]
    pub elevation_point1_m: f64,
    #[serde(default)]
    pub elevation_point2_m: f64,
    /// Absolute pressure at point 1; the catalog's atmospheric pressure when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_point1_pa: Option<f64>,
    /// Absolute pressure at point 2; the catalog's atmospheric pressure when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_point2_pa: Option<f64>,
    #[serde(default)]
    pub segments: Vec<SegmentDef>,
    #[serde(default)]
    pub fittings: Vec<FittingRefDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suction: Option<SuctionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentDef {
    pub length_m: f64,
    pub orientation: Orientation,
    pub diameter_m: f64,
    #[serde(default = "default_material")]
    pub material: String,
}

/// Reference to a catalog fitting plus the installed count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FittingRefDef {
    pub kind: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SuctionDef {
    #[serde(default = "default_suction_length")]
    pub length_m: f64,
    #[serde(default = "default_suction_elevation")]
    pub fluid_elevation_m: f64,
}

impl Default for SuctionDef {
    fn default() -> Self {
        Self {
            length_m: default_suction_length(),
            fluid_elevation_m: default_suction_elevation(),
        }
    }
}

fn default_pump_efficiency() -> f64 {
    0.70
}

fn default_material() -> String {
    DEFAULT_MATERIAL.to_string()
}

fn default_quantity() -> u32 {
    1
}

fn default_suction_length() -> f64 {
    DEFAULT_SUCTION_LENGTH_M
}

fn default_suction_elevation() -> f64 {
    DEFAULT_SUCTION_ELEVATION_M
}
