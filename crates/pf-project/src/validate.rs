//! Structural validation of system descriptions.
//!
//! Physical invariants are enforced again by the model constructors; this
//! pass reports problems with the field names used in the file.

use crate::schema::SystemDef;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate fitting kind: {kind}")]
    DuplicateFitting { kind: String },

    #[error("Missing value: {field}")]
    Missing { field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_system_def(def: &SystemDef) -> Result<(), ValidationError> {
    if def.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "name".to_string(),
        });
    }
    if def.fluid.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "fluid".to_string(),
        });
    }

    check_positive("flow_rate_m3_s", def.flow_rate_m3_s)?;
    check_finite("pump_efficiency", def.pump_efficiency)?;
    if def.pump_efficiency <= 0.0 || def.pump_efficiency > 1.0 {
        return Err(invalid(
            "pump_efficiency",
            def.pump_efficiency,
            "must be in (0, 1]",
        ));
    }
    check_finite("elevation_point1_m", def.elevation_point1_m)?;
    check_finite("elevation_point2_m", def.elevation_point2_m)?;
    if let Some(p1) = def.pressure_point1_pa {
        check_non_negative("pressure_point1_pa", p1)?;
    }
    if let Some(p2) = def.pressure_point2_pa {
        check_non_negative("pressure_point2_pa", p2)?;
    }

    for (i, segment) in def.segments.iter().enumerate() {
        check_positive(&format!("segments[{i}].length_m"), segment.length_m)?;
        check_positive(&format!("segments[{i}].diameter_m"), segment.diameter_m)?;
    }

    let mut kinds = HashSet::new();
    for fitting in &def.fittings {
        if !kinds.insert(fitting.kind.as_str()) {
            return Err(ValidationError::DuplicateFitting {
                kind: fitting.kind.clone(),
            });
        }
    }

    if let Some(suction) = &def.suction {
        check_non_negative("suction.length_m", suction.length_m)?;
        check_finite("suction.fluid_elevation_m", suction.fluid_elevation_m)?;
    }

    Ok(())
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "cannot be negative"))
    }
}
