//! The piping system aggregate.

use crate::error::{ModelError, ModelResult};
use crate::fitting::{Fitting, FittingKind};
use crate::fluid::Fluid;
use crate::segment::{Orientation, PipeSegment};
use pf_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};
use pf_core::units::{Length, Pressure, VolumeRate, constants, m};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Single-line pumped system from point 1 (suction reservoir) to point 2
/// (discharge).
///
/// Segments keep insertion order, which is the physical traversal order.
/// Fittings are stored once per kind; the multiplicity lives in
/// [`Fitting::quantity`]. The fluid is shared and may back several systems.
#[derive(Debug, Clone)]
pub struct PipingSystem {
    segments: Vec<PipeSegment>,
    fittings: BTreeMap<FittingKind, Fitting>,
    fluid: Arc<Fluid>,
    flow_rate: VolumeRate,
    pump_efficiency: f64,
    elevation_point1: Length,
    elevation_point2: Length,
    pressure_point1: Pressure,
    pressure_point2: Pressure,
}

impl PipingSystem {
    /// Create an empty system.
    ///
    /// Both points start at zero elevation and atmospheric pressure.
    ///
    /// # Errors
    /// Flow rate must be strictly positive and the pump efficiency in (0, 1].
    pub fn new(fluid: Arc<Fluid>, flow_rate: VolumeRate, pump_efficiency: f64) -> ModelResult<Self> {
        ensure_positive(flow_rate.value, "flow rate must be positive")?;
        ensure_positive(pump_efficiency, "pump efficiency must be in (0,1]")?;
        if pump_efficiency > 1.0 {
            return Err(ModelError::InvalidValue {
                what: "pump efficiency must be in (0,1]",
            });
        }

        Ok(Self {
            segments: Vec::new(),
            fittings: BTreeMap::new(),
            fluid,
            flow_rate,
            pump_efficiency,
            elevation_point1: m(0.0),
            elevation_point2: m(0.0),
            pressure_point1: constants::atmospheric_pressure(),
            pressure_point2: constants::atmospheric_pressure(),
        })
    }

    /// Set the elevations of points 1 and 2 (signed, any datum).
    pub fn with_elevations(mut self, point1: Length, point2: Length) -> ModelResult<Self> {
        ensure_finite(point1.value, "elevation of point 1")?;
        ensure_finite(point2.value, "elevation of point 2")?;
        self.elevation_point1 = point1;
        self.elevation_point2 = point2;
        Ok(self)
    }

    /// Set the absolute pressures at points 1 and 2.
    pub fn with_pressures(mut self, point1: Pressure, point2: Pressure) -> ModelResult<Self> {
        ensure_non_negative(point1.value, "pressure at point 1 cannot be negative")?;
        ensure_non_negative(point2.value, "pressure at point 2 cannot be negative")?;
        self.pressure_point1 = point1;
        self.pressure_point2 = point2;
        Ok(self)
    }

    /// Append a validated segment of the default material.
    pub fn add_segment(
        &mut self,
        length: Length,
        orientation: Orientation,
        diameter: Length,
    ) -> ModelResult<&PipeSegment> {
        let segment = PipeSegment::new(length, orientation, diameter)?;
        Ok(self.push_segment(segment))
    }

    /// Append an already constructed segment.
    pub fn push_segment(&mut self, segment: PipeSegment) -> &PipeSegment {
        self.segments.push(segment);
        &self.segments[self.segments.len() - 1]
    }

    /// Attach a copy of `fitting`.
    ///
    /// A kind already present has its quantity increased instead of getting a
    /// second entry. Zero-quantity fittings of a new kind are not stored.
    ///
    /// # Errors
    /// The kind is already attached with a different K, equivalent length,
    /// standard or manufacturer. The system is left unchanged.
    pub fn add_fitting(&mut self, fitting: &Fitting) -> ModelResult<()> {
        if let Some(existing) = self.fittings.get_mut(&fitting.kind()) {
            if !existing.same_template(fitting) {
                return Err(ModelError::InvalidValue {
                    what: "fitting template differs from attached kind",
                });
            }
            existing.add_quantity(fitting.quantity());
        } else if fitting.quantity() > 0 {
            self.fittings.insert(fitting.kind(), fitting.clone());
        }
        Ok(())
    }

    /// Replace the installed count of `kind`. Zero removes the entry.
    ///
    /// Returns `false` when the kind is not attached.
    pub fn set_fitting_quantity(&mut self, kind: FittingKind, quantity: u32) -> bool {
        if quantity == 0 {
            return self.fittings.remove(&kind).is_some();
        }
        match self.fittings.get_mut(&kind) {
            Some(fitting) => {
                fitting.set_quantity(quantity);
                true
            }
            None => false,
        }
    }

    pub fn segments(&self) -> &[PipeSegment] {
        &self.segments
    }

    /// Attached fittings in `FittingKind` order.
    pub fn fittings(&self) -> impl Iterator<Item = &Fitting> {
        self.fittings.values()
    }

    pub fn fitting(&self, kind: FittingKind) -> Option<&Fitting> {
        self.fittings.get(&kind)
    }

    pub fn fluid(&self) -> &Fluid {
        &self.fluid
    }

    pub fn shared_fluid(&self) -> &Arc<Fluid> {
        &self.fluid
    }

    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    pub fn pump_efficiency(&self) -> f64 {
        self.pump_efficiency
    }

    pub fn elevation_point1(&self) -> Length {
        self.elevation_point1
    }

    pub fn elevation_point2(&self) -> Length {
        self.elevation_point2
    }

    pub fn pressure_point1(&self) -> Pressure {
        self.pressure_point1
    }

    pub fn pressure_point2(&self) -> Pressure {
        self.pressure_point2
    }

    /// Sum of all segment lengths.
    pub fn total_length(&self) -> Length {
        self.segments
            .iter()
            .fold(m(0.0), |acc, seg| acc + seg.length())
    }

    /// Sum of the equivalent lengths of all attached fittings.
    pub fn total_equivalent_length(&self) -> Length {
        self.fittings()
            .fold(m(0.0), |acc, f| acc + f.equivalent_length_total())
    }

    /// Whether every segment shares the first segment's diameter.
    ///
    /// Trivially true for an empty system.
    pub fn is_constant_diameter(&self) -> bool {
        match self.segments.first() {
            None => true,
            Some(first) => self
                .segments
                .iter()
                .all(|seg| seg.diameter() == first.diameter()),
        }
    }

    pub fn vertical_segments(&self) -> impl Iterator<Item = &PipeSegment> {
        self.segments
            .iter()
            .filter(|seg| seg.orientation() == Orientation::Vertical)
    }

    pub fn horizontal_segments(&self) -> impl Iterator<Item = &PipeSegment> {
        self.segments
            .iter()
            .filter(|seg| seg.orientation() == Orientation::Horizontal)
    }
}
