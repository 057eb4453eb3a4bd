use std::collections::HashMap;

use crate::models::RankEntry;

/// Rank assigned to any label that is absent from a table.
pub const UNRANKED: u32 = 0;

/// Hand-authored capability ranking for one hardware family (CPUs or GPUs).
///
/// Maps an exact hardware label to an integer rank; a higher rank is strictly
/// more capable. Ranks need not be unique — the shipped data deliberately ties
/// several labels (e.g. "Intel Core i3" and "AMD FX 6300"). Labels not present
/// in the table resolve to rank 0, which is documented behavior rather than an
/// error: a storefront catalog always contains requirement strings nobody
/// bothered to rank.
#[derive(Debug, Clone, Default)]
pub struct RankTable {
    ranks: HashMap<String, u32>,
}

impl RankTable {
    /// Build a table from injected entries. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RankEntry>,
    {
        Self {
            ranks: entries
                .into_iter()
                .map(|entry| (entry.label, entry.rank))
                .collect(),
        }
    }

    /// Look up a label's rank, defaulting to the unranked floor of 0.
    pub fn rank(&self, label: &str) -> u32 {
        self.ranks.get(label).copied().unwrap_or(UNRANKED)
    }

    /// Whether `candidate` hardware satisfies a `required` minimum.
    ///
    /// True iff the labels are textually identical OR `candidate` ranks
    /// strictly higher than `required`.
    ///
    /// Note the asymmetric edge case this encodes: two *different* unranked
    /// labels both resolve to rank 0 and therefore never satisfy each other in
    /// either direction. An unknown user CPU can only run a game whose
    /// requirement string matches exactly, even when that requirement is also
    /// unknown. Observed behavior of the production tables; kept as-is pending
    /// a product decision (see DESIGN.md).
    pub fn at_least_as_capable(&self, candidate: &str, required: &str) -> bool {
        candidate == required || self.rank(candidate) > self.rank(required)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<(String, u32)> for RankTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}
