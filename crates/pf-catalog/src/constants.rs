//! Physical constants table.

use crate::error::{CatalogError, CatalogResult};
use pf_core::numeric::{ensure_non_negative, ensure_positive};
use pf_core::units::constants::{ATMOSPHERIC_PRESSURE_PA, GRAVITY_MPS2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the gravitational acceleration (m/s²).
pub const GRAVITY_KEY: &str = "gravity";
/// Key of the standard atmospheric pressure (Pa).
pub const ATMOSPHERIC_PRESSURE_KEY: &str = "atmospheric_pressure";

/// Named numeric constants.
///
/// Lookups of recognised keys never fail: an absent key falls back to the
/// default from `pf_core::units::constants`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constants {
    values: BTreeMap<String, f64>,
}

impl Constants {
    /// Empty table; every lookup uses its fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the default gravity and atmospheric pressure.
    pub fn standard() -> Self {
        [
            (GRAVITY_KEY, GRAVITY_MPS2),
            (ATMOSPHERIC_PRESSURE_KEY, ATMOSPHERIC_PRESSURE_PA),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gravitational acceleration in m/s² (default 9.81).
    pub fn gravity(&self) -> f64 {
        self.get(GRAVITY_KEY).unwrap_or(GRAVITY_MPS2)
    }

    /// Atmospheric pressure in Pa (default 101325).
    ///
    /// Default pressure of the two reference points of a system description.
    pub fn atmospheric_pressure(&self) -> f64 {
        self.get(ATMOSPHERIC_PRESSURE_KEY)
            .unwrap_or(ATMOSPHERIC_PRESSURE_PA)
    }

    /// Check the recognised keys that are present.
    ///
    /// # Errors
    /// `gravity` must be finite and positive, `atmospheric_pressure` finite
    /// and non-negative. Other keys are not inspected.
    pub fn validate(&self) -> CatalogResult<()> {
        if let Some(value) = self.get(GRAVITY_KEY) {
            ensure_positive(value, GRAVITY_KEY).map_err(|_| CatalogError::InvalidConstant {
                name: GRAVITY_KEY,
                value,
            })?;
        }
        if let Some(value) = self.get(ATMOSPHERIC_PRESSURE_KEY) {
            ensure_non_negative(value, ATMOSPHERIC_PRESSURE_KEY).map_err(|_| {
                CatalogError::InvalidConstant {
                    name: ATMOSPHERIC_PRESSURE_KEY,
                    value,
                }
            })?;
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Constants {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
