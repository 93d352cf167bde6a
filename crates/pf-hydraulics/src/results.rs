//! Fixed-shape result record handed to presentation layers.

use serde::{Deserialize, Serialize};

/// Every intermediate and final quantity of one pumping calculation.
///
/// All fields are always populated; for a system without segments the
/// velocity, Reynolds number, friction factor and loss fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PumpingResults {
    // Flow
    pub velocity_m_s: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,

    // Losses
    pub major_losses_m: f64,
    pub minor_losses_m: f64,
    pub total_losses_m: f64,

    // Heads
    pub elevation_head_m: f64,
    pub pressure_head_m: f64,
    pub total_pump_head_m: f64,
    pub suction_head_m: f64,
    pub discharge_head_m: f64,

    // NPSH
    pub npsh_available_m: f64,
    pub initial_pressure_head_m: f64,
    pub vapor_pressure_head_m: f64,
    pub suction_fluid_elevation_m: f64,
    pub suction_losses_m: f64,

    // Power
    pub hydraulic_power_w: f64,
    pub pump_power_w: f64,
    pub hydraulic_power_kw: f64,
    pub pump_power_kw: f64,
}

impl PumpingResults {
    /// `(key, value, unit)` rows in declaration order.
    pub fn rows(&self) -> [(&'static str, f64, &'static str); 20] {
        [
            ("velocity", self.velocity_m_s, "m/s"),
            ("reynolds_number", self.reynolds_number, "-"),
            ("friction_factor", self.friction_factor, "-"),
            ("major_losses", self.major_losses_m, "m"),
            ("minor_losses", self.minor_losses_m, "m"),
            ("total_losses", self.total_losses_m, "m"),
            ("elevation_head", self.elevation_head_m, "m"),
            ("pressure_head", self.pressure_head_m, "m"),
            ("total_pump_head", self.total_pump_head_m, "m"),
            ("suction_head", self.suction_head_m, "m"),
            ("discharge_head", self.discharge_head_m, "m"),
            ("npsh_available", self.npsh_available_m, "m"),
            ("initial_pressure_head", self.initial_pressure_head_m, "m"),
            ("vapor_pressure_head", self.vapor_pressure_head_m, "m"),
            ("suction_fluid_elevation", self.suction_fluid_elevation_m, "m"),
            ("suction_losses", self.suction_losses_m, "m"),
            ("hydraulic_power", self.hydraulic_power_w, "W"),
            ("pump_power", self.pump_power_w, "W"),
            ("hydraulic_power_kw", self.hydraulic_power_kw, "kW"),
            ("pump_power_kw", self.pump_power_kw, "kW"),
        ]
    }
}
