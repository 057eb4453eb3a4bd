use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::Settings;
use crate::core::{Matcher, RankTable};
use crate::models::{CatalogItem, CatalogResponse, CatalogTier, RankEntry};

/// Errors that can occur while loading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// On-disk shape of `data/catalog.toml`
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    tiers: Vec<CatalogTier>,
}

/// On-disk shape of `data/hardware.toml`
#[derive(Debug, Deserialize)]
struct HardwareDocument {
    #[serde(default)]
    cpu: Vec<RankEntry>,
    #[serde(default)]
    gpu: Vec<RankEntry>,
}

const BUILTIN_HARDWARE: &str = include_str!("../../data/hardware.toml");
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Loads and owns the static catalog dataset: the tiered item list and the
/// two hardware rank tables.
///
/// Everything is read once, up front; after construction the provider is
/// immutable and can be shared freely across threads.
#[derive(Debug)]
pub struct CatalogProvider {
    tiers: Vec<CatalogTier>,
    items: Vec<CatalogItem>,
    cpu_ranks: RankTable,
    gpu_ranks: RankTable,
}

impl CatalogProvider {
    /// Build a provider from the dataset compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_documents(
            BUILTIN_HARDWARE,
            Path::new("<builtin>/hardware.toml"),
            BUILTIN_CATALOG,
            Path::new("<builtin>/catalog.toml"),
        )
    }

    /// Load a provider from operator-supplied data files.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        hardware_path: P,
        catalog_path: Q,
    ) -> Result<Self, CatalogError> {
        let hardware_path = hardware_path.as_ref();
        let catalog_path = catalog_path.as_ref();

        let hardware = read_file(hardware_path)?;
        let catalog = read_file(catalog_path)?;

        Self::from_documents(&hardware, hardware_path, &catalog, catalog_path)
    }

    /// Load according to [`Settings`]: explicit data files when configured,
    /// the builtin dataset otherwise.
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        match (&settings.data.hardware_file, &settings.data.catalog_file) {
            (Some(hardware), Some(catalog)) => Self::load(hardware, catalog),
            _ => Self::builtin(),
        }
    }

    fn from_documents(
        hardware: &str,
        hardware_path: &Path,
        catalog: &str,
        catalog_path: &Path,
    ) -> Result<Self, CatalogError> {
        let hardware: HardwareDocument = parse_toml(hardware, hardware_path)?;
        let catalog: CatalogDocument = parse_toml(catalog, catalog_path)?;

        let cpu_ranks = RankTable::from_entries(hardware.cpu);
        let gpu_ranks = RankTable::from_entries(hardware.gpu);

        // Flattened union of all tiers, catalog order preserved
        let items: Vec<CatalogItem> = catalog
            .tiers
            .iter()
            .flat_map(|tier| tier.items.iter().cloned())
            .collect();

        tracing::info!(
            items = items.len(),
            tiers = catalog.tiers.len(),
            cpu_labels = cpu_ranks.len(),
            gpu_labels = gpu_ranks.len(),
            "catalog loaded"
        );

        Ok(Self {
            tiers: catalog.tiers,
            items,
            cpu_ranks,
            gpu_ranks,
        })
    }

    /// The flattened catalog the matcher operates over, in original order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The tier grouping, for storefront display only.
    pub fn tiers(&self) -> &[CatalogTier] {
        &self.tiers
    }

    pub fn cpu_ranks(&self) -> &RankTable {
        &self.cpu_ranks
    }

    pub fn gpu_ranks(&self) -> &RankTable {
        &self.gpu_ranks
    }

    /// A matcher configured with this provider's rank tables.
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.cpu_ranks.clone(), self.gpu_ranks.clone())
    }

    /// The tier-grouped view handed to the storefront's browse page.
    pub fn catalog_response(&self) -> CatalogResponse {
        CatalogResponse {
            tiers: self.tiers.clone(),
            total_items: self.items.len(),
        }
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml<T: serde::de::DeserializeOwned>(raw: &str, path: &Path) -> Result<T, CatalogError> {
    toml::from_str(raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}
