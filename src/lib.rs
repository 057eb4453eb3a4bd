//! Rigmatch - Hardware compatibility matching engine for the game storefront
//!
//! Given a user's declared CPU, GPU, and RAM, this library determines which
//! catalog items the user's machine can run, using two hand-authored hardware
//! rank tables plus a numeric RAM threshold. The surrounding web application
//! (auth, forms, rendering) is the caller; everything here is pure,
//! immutable-after-load, and safe for unbounded concurrent use.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{search_by_name, MatchResult, Matcher, RankTable};
pub use models::{
    CatalogItem, CatalogTier, MatchQueryRequest, MatchResponse, RequestError, Tier, UserProfile,
};
pub use services::{CatalogError, CatalogProvider};
