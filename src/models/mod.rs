// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CatalogItem, CatalogTier, RankEntry, Tier, UserProfile};
pub use requests::{MatchQueryRequest, RequestError, SearchRequest};
pub use responses::{CatalogResponse, MatchResponse};
