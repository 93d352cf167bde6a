//! Straight pipe segments.

use crate::error::{ModelError, ModelResult};
use pf_core::numeric::ensure_positive;
use pf_core::units::{Length, m};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipe material used when none is given.
pub const DEFAULT_MATERIAL: &str = "steel";

/// Orientation of a straight run of pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ModelError::InvalidOrientation {
                value: s.to_string(),
            }),
        }
    }
}

/// Straight pipe segment between two points of the line.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSegment {
    length: Length,
    orientation: Orientation,
    diameter: Length,
    material: String,
}

impl PipeSegment {
    /// Create a segment of the default material.
    ///
    /// # Errors
    /// Length and inner diameter must be finite and strictly positive.
    pub fn new(length: Length, orientation: Orientation, diameter: Length) -> ModelResult<Self> {
        ensure_positive(length.value, "segment length must be positive")?;
        ensure_positive(diameter.value, "segment diameter must be positive")?;

        Ok(Self {
            length,
            orientation,
            diameter,
            material: DEFAULT_MATERIAL.to_string(),
        })
    }

    /// Create a segment from raw SI values (m).
    pub fn from_si(length_m: f64, orientation: Orientation, diameter_m: f64) -> ModelResult<Self> {
        Self::new(m(length_m), orientation, m(diameter_m))
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn diameter(&self) -> Length {
        self.diameter
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    /// L/D, the slenderness that scales the friction loss.
    pub fn length_to_diameter(&self) -> f64 {
        self.length.value / self.diameter.value
    }
}
