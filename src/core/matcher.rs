use crate::core::filters::{meets_requirements, name_contains};
use crate::core::ranking::RankTable;
use crate::models::{CatalogItem, UserProfile};

/// Result of a catalog filtering pass
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<CatalogItem>,
    pub total_candidates: usize,
}

/// Compatibility matcher over the two hardware rank tables.
///
/// Stateless after construction: the tables are immutable, every operation
/// takes `&self`, and the same inputs always produce the same output. Safe to
/// share across any number of concurrent callers without locking.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cpu_ranks: RankTable,
    gpu_ranks: RankTable,
}

impl Matcher {
    pub fn new(cpu_ranks: RankTable, gpu_ranks: RankTable) -> Self {
        Self {
            cpu_ranks,
            gpu_ranks,
        }
    }

    /// Whether a single catalog item runs on the profile's hardware.
    pub fn matches(&self, profile: &UserProfile, item: &CatalogItem) -> bool {
        meets_requirements(profile, item, &self.cpu_ranks, &self.gpu_ranks)
    }

    /// Filter a catalog down to the items the profile can run.
    ///
    /// Order-preserving: the result is the subsequence of `catalog` for which
    /// [`Matcher::matches`] holds. Pure and idempotent — filtering an
    /// already-filtered result with the same profile returns it unchanged.
    /// An empty catalog yields an empty result.
    pub fn filter_catalog(&self, profile: &UserProfile, catalog: &[CatalogItem]) -> MatchResult {
        let total_candidates = catalog.len();

        let matches: Vec<CatalogItem> = catalog
            .iter()
            .filter(|item| self.matches(profile, item))
            .cloned()
            .collect();

        tracing::debug!(
            matched = matches.len(),
            total_candidates,
            "filtered catalog for profile"
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

/// Find catalog items whose name contains `query`, case-insensitively.
///
/// Literal substring comparison in original catalog order, no scoring. An
/// empty query deliberately returns the full catalog — an accidental empty
/// search renders the whole storefront rather than "no results".
pub fn search_by_name(query: &str, catalog: &[CatalogItem]) -> MatchResult {
    let total_candidates = catalog.len();

    let matches: Vec<CatalogItem> = catalog
        .iter()
        .filter(|item| name_contains(item, query))
        .cloned()
        .collect();

    tracing::debug!(
        matched = matches.len(),
        total_candidates,
        query,
        "searched catalog by name"
    );

    MatchResult {
        matches,
        total_candidates,
    }
}
