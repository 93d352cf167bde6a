// pf-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Fallback values used when the reference data does not define a constant.
pub mod constants {
    use super::*;

    /// Engineering value of g used by the pumping calculations.
    pub const GRAVITY_MPS2: f64 = 9.81;
    pub const ATMOSPHERIC_PRESSURE_PA: f64 = 101_325.0;

    #[inline]
    pub fn atmospheric_pressure() -> Pressure {
        pa(ATMOSPHERIC_PRESSURE_PA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _l = m(2.0);
        let _q = m3ps(0.01);
        let _rho = kgpm3(998.2);
        let _mu = pas(1.0e-3);
    }

    #[test]
    fn millimeters_are_stored_in_meters() {
        assert!((mm(450.0).value - 0.45).abs() < 1e-12);
    }

    #[test]
    fn base_values_are_si() {
        assert_eq!(constants::atmospheric_pressure().value, 101_325.0);
        assert_eq!(constants::GRAVITY_MPS2, 9.81);
        assert_eq!(m3ps(0.01).value, 0.01);
    }
}
