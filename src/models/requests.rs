use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::UserProfile;

/// Errors produced while turning raw caller input into a usable profile
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("invalid RAM value {0:?}: expected a whole number of GiB")]
    InvalidRam(String),
}

/// Raw compatibility query as it arrives from the form layer.
///
/// RAM comes in as text and is only parsed here; the matcher's precondition
/// is an integer RAM value, and malformed text is an error owned by the
/// caller, never silently coerced.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchQueryRequest {
    #[validate(length(min = 1))]
    pub cpu: String,
    #[validate(length(min = 1))]
    pub gpu: String,
    pub ram: String,
}

impl MatchQueryRequest {
    /// Validate and convert into a [`UserProfile`].
    pub fn into_profile(self) -> Result<UserProfile, RequestError> {
        self.validate()?;

        let ram = self
            .ram
            .trim()
            .parse::<u32>()
            .map_err(|_| RequestError::InvalidRam(self.ram.clone()))?;

        Ok(UserProfile {
            cpu: self.cpu,
            gpu: self.gpu,
            ram,
        })
    }
}

/// Raw name-search query from the storefront search box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

impl SearchRequest {
    /// Normalized query text: surrounding whitespace stripped, case folded.
    pub fn normalized(&self) -> String {
        self.query.trim().to_lowercase()
    }
}
