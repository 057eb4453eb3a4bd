// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod ranking;

pub use filters::{meets_requirements, name_contains};
pub use matcher::{search_by_name, MatchResult, Matcher};
pub use ranking::{RankTable, UNRANKED};
