use serde::{Deserialize, Serialize};

/// One purchasable item in the storefront catalog.
///
/// `cpu` and `gpu` are the minimum hardware labels as printed on the store
/// page; `ram` is the minimum in GiB, parsed to an integer at load time.
/// `image` is an opaque asset reference for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: u32,
    pub image: String,
}

/// Display bucket for catalog items. Presentation-only: the matcher works on
/// the flattened union of all tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
    Ultra,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
            Tier::Ultra => "ultra",
        };
        write!(f, "{}", name)
    }
}

/// A named group of catalog items sharing a requirements tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTier {
    pub name: Tier,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// The querying user's declared hardware. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub cpu: String,
    pub gpu: String,
    pub ram: u32,
}

/// One row of a hardware rank table as it appears in the data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub label: String,
    pub rank: u32,
}
