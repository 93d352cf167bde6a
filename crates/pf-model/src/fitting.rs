//! Inline fittings (valves, elbows, tees, ...).

use crate::error::{ModelError, ModelResult};
use pf_core::numeric::ensure_non_negative;
use pf_core::units::Length;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog key of a fitting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FittingKind {
    #[serde(rename = "tank_inlet")]
    TankInlet,
    #[serde(rename = "tank_outlet")]
    TankOutlet,
    #[serde(rename = "elbow_90_long_radius")]
    Elbow90LongRadius,
    #[serde(rename = "elbow_90_short_radius")]
    Elbow90ShortRadius,
    #[serde(rename = "elbow_45")]
    Elbow45,
    #[serde(rename = "tee_straight")]
    TeeStraight,
    #[serde(rename = "tee_branch")]
    TeeBranch,
    #[serde(rename = "gate_valve_open")]
    GateValveOpen,
    #[serde(rename = "globe_valve_open")]
    GlobeValveOpen,
    #[serde(rename = "ball_check_valve")]
    BallCheckValve,
    #[serde(rename = "swing_check_valve")]
    SwingCheckValve,
    #[serde(rename = "y_strainer")]
    YStrainer,
    #[serde(rename = "sudden_contraction")]
    SuddenContraction,
    #[serde(rename = "sudden_expansion")]
    SuddenExpansion,
}

impl FittingKind {
    pub const ALL: [FittingKind; 14] = [
        FittingKind::TankInlet,
        FittingKind::TankOutlet,
        FittingKind::Elbow90LongRadius,
        FittingKind::Elbow90ShortRadius,
        FittingKind::Elbow45,
        FittingKind::TeeStraight,
        FittingKind::TeeBranch,
        FittingKind::GateValveOpen,
        FittingKind::GlobeValveOpen,
        FittingKind::BallCheckValve,
        FittingKind::SwingCheckValve,
        FittingKind::YStrainer,
        FittingKind::SuddenContraction,
        FittingKind::SuddenExpansion,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            FittingKind::TankInlet => "tank_inlet",
            FittingKind::TankOutlet => "tank_outlet",
            FittingKind::Elbow90LongRadius => "elbow_90_long_radius",
            FittingKind::Elbow90ShortRadius => "elbow_90_short_radius",
            FittingKind::Elbow45 => "elbow_45",
            FittingKind::TeeStraight => "tee_straight",
            FittingKind::TeeBranch => "tee_branch",
            FittingKind::GateValveOpen => "gate_valve_open",
            FittingKind::GlobeValveOpen => "globe_valve_open",
            FittingKind::BallCheckValve => "ball_check_valve",
            FittingKind::SwingCheckValve => "swing_check_valve",
            FittingKind::YStrainer => "y_strainer",
            FittingKind::SuddenContraction => "sudden_contraction",
            FittingKind::SuddenExpansion => "sudden_expansion",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FittingKind::TankInlet => "Tank inlet",
            FittingKind::TankOutlet => "Tank outlet",
            FittingKind::Elbow90LongRadius => "90° elbow, long radius",
            FittingKind::Elbow90ShortRadius => "90° elbow, short radius",
            FittingKind::Elbow45 => "45° elbow",
            FittingKind::TeeStraight => "Tee, flow through run",
            FittingKind::TeeBranch => "Tee, flow through branch",
            FittingKind::GateValveOpen => "Gate valve, fully open",
            FittingKind::GlobeValveOpen => "Globe valve, fully open",
            FittingKind::BallCheckValve => "Ball check valve",
            FittingKind::SwingCheckValve => "Swing check valve",
            FittingKind::YStrainer => "Y-strainer",
            FittingKind::SuddenContraction => "Sudden contraction",
            FittingKind::SuddenExpansion => "Sudden expansion",
        }
    }
}

impl fmt::Display for FittingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FittingKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        FittingKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == id)
            .ok_or_else(|| ModelError::UnknownFittingKind { id: id.to_string() })
    }
}

/// A fitting type together with how many of it are installed.
///
/// Values are copied into a system on attach, so changing the quantity of one
/// never affects a catalog template or another system.
#[derive(Debug, Clone, PartialEq)]
pub struct Fitting {
    kind: FittingKind,
    coefficient_k: f64,
    equivalent_length: Length,
    standard: String,
    manufacturer: String,
    quantity: u32,
}

impl Fitting {
    /// Create a single fitting (quantity 1).
    ///
    /// # Errors
    /// The K coefficient and equivalent length must be finite and non-negative.
    pub fn new(
        kind: FittingKind,
        coefficient_k: f64,
        equivalent_length: Length,
        standard: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> ModelResult<Self> {
        ensure_non_negative(coefficient_k, "fitting K coefficient cannot be negative")?;
        ensure_non_negative(
            equivalent_length.value,
            "fitting equivalent length cannot be negative",
        )?;

        Ok(Self {
            kind,
            coefficient_k,
            equivalent_length,
            standard: standard.into(),
            manufacturer: manufacturer.into(),
            quantity: 1,
        })
    }

    /// Independent copy with another multiplicity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn kind(&self) -> FittingKind {
        self.kind
    }

    pub fn coefficient_k(&self) -> f64 {
        self.coefficient_k
    }

    pub fn equivalent_length(&self) -> Length {
        self.equivalent_length
    }

    pub fn standard(&self) -> &str {
        &self.standard
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// K × quantity.
    pub fn k_total(&self) -> f64 {
        self.coefficient_k * f64::from(self.quantity)
    }

    /// Equivalent length × quantity.
    pub fn equivalent_length_total(&self) -> Length {
        self.equivalent_length * f64::from(self.quantity)
    }

    /// Same catalog entry, ignoring the quantity.
    pub fn same_template(&self, other: &Fitting) -> bool {
        self.kind == other.kind
            && self.coefficient_k == other.coefficient_k
            && self.equivalent_length == other.equivalent_length
            && self.standard == other.standard
            && self.manufacturer == other.manufacturer
    }

    pub(crate) fn add_quantity(&mut self, extra: u32) {
        self.quantity = self.quantity.saturating_add(extra);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
