//! Typed list of the instruments the tool knows about.
//! Resolved once at load time instead of inferred from file names.

use {
    crate::errors::CatalogError,
    serde::{Deserialize, Serialize},
    std::{
        collections::HashSet,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    /// Price series file. Relative paths are relative to the catalog file.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InstrumentCatalog {
    pub instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    /// Checks symbols and anchors relative paths at `base_dir`.
    pub fn resolve(mut self, base_dir: &Path) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (idx, inst) in self.instruments.iter_mut().enumerate() {
            let symbol = inst.symbol.trim();
            if symbol.is_empty() {
                return Err(CatalogError::EmptySymbol(idx));
            }
            if !seen.insert(symbol.to_string()) {
                return Err(CatalogError::DuplicateSymbol(symbol.to_string()));
            }
            inst.symbol = symbol.to_string();
            if inst.name.is_empty() {
                inst.name = inst.symbol.clone();
            }
            if inst.path.is_relative() {
                inst.path = base_dir.join(&inst.path);
            }
        }
        Ok(self)
    }

    pub fn get(&self, symbol: &str) -> Result<&Instrument, CatalogError> {
        self.instruments
            .iter()
            .find(|i| i.symbol == symbol)
            .ok_or_else(|| CatalogError::UnknownSymbol(symbol.to_string()))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.instruments.iter().map(|i| i.symbol.as_str())
    }

    /// Distinct sectors, in first-seen order.
    pub fn sectors(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for s in self.instruments.iter().filter_map(|i| i.sector.as_deref()) {
            if !out.contains(&s) {
                out.push(s);
            }
        }
        out
    }

    pub fn in_sector<'a>(&'a self, sector: &'a str) -> impl Iterator<Item = &'a Instrument> {
        self.instruments
            .iter()
            .filter(move |i| i.sector.as_deref() == Some(sector))
    }
}
