//! Constant-property fluid.

use crate::error::ModelResult;
use pf_core::numeric::{ensure_non_negative, ensure_positive};
use pf_core::units::{Density, DynVisc, Pressure, kgpm3, pa, pas};

/// Incompressible fluid with fixed properties.
///
/// Properties are not temperature dependent; a fluid at another temperature
/// is a different catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Fluid {
    name: String,
    density: Density,
    viscosity: DynVisc,
    vapor_pressure: Pressure,
}

impl Fluid {
    /// Create a fluid.
    ///
    /// # Errors
    /// Density and dynamic viscosity must be strictly positive, vapor pressure
    /// non-negative, and all of them finite.
    pub fn new(
        name: impl Into<String>,
        density: Density,
        viscosity: DynVisc,
        vapor_pressure: Pressure,
    ) -> ModelResult<Self> {
        ensure_positive(density.value, "fluid density must be positive")?;
        ensure_positive(viscosity.value, "fluid viscosity must be positive")?;
        ensure_non_negative(
            vapor_pressure.value,
            "fluid vapor pressure cannot be negative",
        )?;

        Ok(Self {
            name: name.into(),
            density,
            viscosity,
            vapor_pressure,
        })
    }

    /// Create a fluid from raw SI values (kg/m³, Pa·s, Pa).
    pub fn from_si(
        name: impl Into<String>,
        density_kg_m3: f64,
        viscosity_pa_s: f64,
        vapor_pressure_pa: f64,
    ) -> ModelResult<Self> {
        Self::new(
            name,
            kgpm3(density_kg_m3),
            pas(viscosity_pa_s),
            pa(vapor_pressure_pa),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn viscosity(&self) -> DynVisc {
        self.viscosity
    }

    pub fn vapor_pressure(&self) -> Pressure {
        self.vapor_pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;

    #[test]
    fn water_is_valid() {
        let water = Fluid::from_si("water_20c", 998.2, 1.002e-3, 2339.0).unwrap();
        assert_eq!(water.name(), "water_20c");
        assert_eq!(water.density().value, 998.2);
        assert_eq!(water.viscosity().value, 1.002e-3);
        assert_eq!(water.vapor_pressure().value, 2339.0);
    }

    #[test]
    fn zero_vapor_pressure_is_allowed() {
        assert!(Fluid::from_si("oil", 850.0, 0.03, 0.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_density() {
        let err = Fluid::from_si("bad", 0.0, 1e-3, 0.0).unwrap_err();
        assert!(matches!(err, ModelError::InvalidValue { what } if what.contains("density")));
        assert!(Fluid::from_si("bad", -1.0, 1e-3, 0.0).is_err());
    }

    #[test]
    fn rejects_non_positive_viscosity() {
        let err = Fluid::from_si("bad", 1000.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, ModelError::InvalidValue { what } if what.contains("viscosity")));
    }

    #[test]
    fn rejects_negative_vapor_pressure() {
        assert!(Fluid::from_si("bad", 1000.0, 1e-3, -1.0).is_err());
    }

    #[test]
    fn rejects_nan() {
        let err = Fluid::from_si("bad", f64::NAN, 1e-3, 0.0).unwrap_err();
        assert!(matches!(err, ModelError::NonFinite { .. }));
    }
}
