//! Reference-data files (YAML or JSON).

use crate::catalog::{Catalog, CatalogSource};
use crate::constants::Constants;
use crate::error::{CatalogError, CatalogResult};
use pf_core::units::m;
use pf_model::{Fitting, FittingKind, Fluid};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk layout of a reference-data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub constants: Constants,
    #[serde(default)]
    pub fluids: Vec<FluidRecord>,
    #[serde(default)]
    pub fittings: Vec<FittingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidRecord {
    pub name: String,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub vapor_pressure_pa: f64,
}

/// Fitting row. Equivalent length is tabulated in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingRecord {
    pub kind: String,
    pub k: f64,
    pub equivalent_length_mm: f64,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub manufacturer: String,
}

impl FluidRecord {
    pub fn to_fluid(&self) -> CatalogResult<Fluid> {
        Ok(Fluid::from_si(
            self.name.clone(),
            self.density_kg_m3,
            self.viscosity_pa_s,
            self.vapor_pressure_pa,
        )?)
    }

    pub fn from_fluid(fluid: &Fluid) -> Self {
        Self {
            name: fluid.name().to_string(),
            density_kg_m3: fluid.density().value,
            viscosity_pa_s: fluid.viscosity().value,
            vapor_pressure_pa: fluid.vapor_pressure().value,
        }
    }
}

impl FittingRecord {
    pub fn to_fitting(&self) -> CatalogResult<Fitting> {
        let kind: FittingKind = self.kind.parse()?;
        Ok(Fitting::new(
            kind,
            self.k,
            m(self.equivalent_length_mm / 1000.0),
            self.standard.clone(),
            self.manufacturer.clone(),
        )?)
    }

    pub fn from_fitting(fitting: &Fitting) -> Self {
        Self {
            kind: fitting.kind().as_str().to_string(),
            k: fitting.coefficient_k(),
            equivalent_length_mm: fitting.equivalent_length().value * 1000.0,
            standard: fitting.standard().to_string(),
            manufacturer: fitting.manufacturer().to_string(),
        }
    }
}

impl CatalogFile {
    /// Validate the constants and every row, then build the lookup tables.
    pub fn into_catalog(self) -> CatalogResult<Catalog> {
        self.constants.validate()?;
        let mut catalog = Catalog::new(self.constants);
        for record in &self.fluids {
            catalog.insert_fluid(record.to_fluid()?)?;
        }
        for record in &self.fittings {
            catalog.insert_fitting(record.to_fitting()?)?;
        }
        debug!(
            constants = catalog.constants().len(),
            fluids = self.fluids.len(),
            fittings = self.fittings.len(),
            "catalog tables built"
        );
        Ok(catalog)
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            constants: catalog.constants().clone(),
            fluids: catalog.fluids().map(FluidRecord::from_fluid).collect(),
            fittings: catalog.fittings().map(FittingRecord::from_fitting).collect(),
        }
    }

    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write as YAML or JSON depending on the extension of `path`.
    pub fn save(&self, path: &Path) -> CatalogResult<()> {
        let content = match Format::of(path)? {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn of(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Reference data read from a `.yaml`/`.yml` or `.json` file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> CatalogResult<Catalog> {
        let format = Format::of(&self.path)?;
        debug!(path = %self.path.display(), ?format, "loading catalog file");
        let content = std::fs::read_to_string(&self.path)?;
        let file = match format {
            Format::Yaml => CatalogFile::from_yaml_str(&content)?,
            Format::Json => CatalogFile::from_json_str(&content)?,
        };
        file.into_catalog()
    }
}
