//! Loaded reference tables and the source abstraction.

use crate::constants::Constants;
use crate::error::{CatalogError, CatalogResult};
use pf_model::{Fitting, FittingKind, Fluid};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Anything able to produce a [`Catalog`].
pub trait CatalogSource {
    /// Read the reference data and build the lookup tables.
    fn load(&self) -> CatalogResult<Catalog>;
}

/// Constants, fitting templates and fluids.
///
/// Templates stay owned by the catalog. [`Catalog::fitting`] hands out value
/// copies and fluids are shared read-only through `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    constants: Constants,
    fittings: BTreeMap<FittingKind, Fitting>,
    fluids: BTreeMap<String, Arc<Fluid>>,
}

impl Catalog {
    pub fn new(constants: Constants) -> Self {
        Self {
            constants,
            ..Self::default()
        }
    }

    /// Register a fluid under its own name.
    pub fn insert_fluid(&mut self, fluid: Fluid) -> CatalogResult<()> {
        if self.fluids.contains_key(fluid.name()) {
            return Err(CatalogError::Duplicate {
                what: "fluid",
                key: fluid.name().to_string(),
            });
        }
        self.fluids.insert(fluid.name().to_string(), Arc::new(fluid));
        Ok(())
    }

    /// Register a fitting template. The stored template always has quantity 1.
    pub fn insert_fitting(&mut self, fitting: Fitting) -> CatalogResult<()> {
        if self.fittings.contains_key(&fitting.kind()) {
            return Err(CatalogError::Duplicate {
                what: "fitting",
                key: fitting.kind().to_string(),
            });
        }
        self.fittings
            .insert(fitting.kind(), fitting.with_quantity(1));
        Ok(())
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    /// Look a fluid up by name.
    pub fn fluid(&self, name: &str) -> CatalogResult<Arc<Fluid>> {
        self.fluids
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::FluidNotFound {
                name: name.to_string(),
            })
    }

    /// Copy of the template for `kind`, quantity 1.
    pub fn fitting(&self, kind: FittingKind) -> CatalogResult<Fitting> {
        self.fittings
            .get(&kind)
            .cloned()
            .ok_or_else(|| CatalogError::FittingNotFound {
                kind: kind.to_string(),
            })
    }

    /// Like [`Catalog::fitting`], keyed by the textual identifier.
    pub fn fitting_by_id(&self, id: &str) -> CatalogResult<Fitting> {
        let kind = id
            .parse::<FittingKind>()
            .map_err(|_| CatalogError::FittingNotFound {
                kind: id.to_string(),
            })?;
        self.fitting(kind)
    }

    pub fn fluid_names(&self) -> impl Iterator<Item = &str> {
        self.fluids.keys().map(String::as_str)
    }

    pub fn fluids(&self) -> impl Iterator<Item = &Fluid> {
        self.fluids.values().map(|f| f.as_ref())
    }

    pub fn fitting_kinds(&self) -> impl Iterator<Item = FittingKind> + '_ {
        self.fittings.keys().copied()
    }

    pub fn fittings(&self) -> impl Iterator<Item = &Fitting> {
        self.fittings.values()
    }
}
