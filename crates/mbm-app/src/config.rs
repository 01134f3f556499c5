//! YAML configuration for the operand menu.

use std::path::Path;

use mbm_core::Value;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{AppError, AppResult};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    pub version: u32,
    #[serde(default)]
    pub operands: Vec<OperandDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperandDef {
    pub label: String,
    /// Value token: `0m`, `0bm`, `1t`, `Real(x)` or a decimal literal.
    pub value: String,
}

impl CatalogConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Validate and build the catalog this config describes.
    pub fn into_catalog(self) -> AppResult<Catalog> {
        if self.version != CONFIG_VERSION {
            return Err(AppError::Validation(format!(
                "Unsupported config version {} (expected {})",
                self.version, CONFIG_VERSION
            )));
        }

        let mut entries = Vec::with_capacity(self.operands.len());
        for def in self.operands {
            let value: Value = def.value.parse().map_err(|e| {
                AppError::Validation(format!("Operand '{}': {}", def.label, e))
            })?;
            entries.push(CatalogEntry::new(def.label, value));
        }

        Catalog::new(entries)
    }
}

impl From<&Catalog> for CatalogConfig {
    fn from(catalog: &Catalog) -> Self {
        Self {
            version: CONFIG_VERSION,
            operands: catalog
                .entries()
                .iter()
                .map(|e| OperandDef {
                    label: e.label.clone(),
                    value: e.value.to_string(),
                })
                .collect(),
        }
    }
}

/// Load config from a YAML file.
pub fn load_config(path: &Path) -> AppResult<CatalogConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    CatalogConfig::from_yaml(&content).map_err(|e| AppError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the operand menu from `path`, or the built-in menu when no path is given.
pub fn load_catalog(path: Option<&Path>) -> AppResult<Catalog> {
    let Some(path) = path else {
        debug!("no config file given, using built-in operand menu");
        return Ok(Catalog::default());
    };

    let catalog = load_config(path)?.into_catalog()?;
    info!(
        path = %path.display(),
        operands = catalog.len(),
        "loaded operand menu"
    );
    Ok(catalog)
}
