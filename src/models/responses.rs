use serde::{Deserialize, Serialize};

use crate::core::MatchResult;
use crate::models::domain::{CatalogItem, CatalogTier};

/// Serialized result handed to the presentation layer after a filtering or
/// search pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<CatalogItem>,
    pub total_candidates: usize,
}

impl From<MatchResult> for MatchResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            matches: result.matches,
            total_candidates: result.total_candidates,
        }
    }
}

/// Full catalog view, grouped by requirements tier for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub tiers: Vec<CatalogTier>,
    pub total_items: usize,
}
