//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use reel_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with posting_id
#[derive(Debug, serde::Deserialize)]
pub struct PostingIdPath {
    pub posting_id: String,
}

impl PostingIdPath {
    /// Parse posting_id as Snowflake
    pub fn posting_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.posting_id, "posting_id")
    }
}

/// Path parameters with profile_id
#[derive(Debug, serde::Deserialize)]
pub struct ProfileIdPath {
    pub profile_id: String,
}

impl ProfileIdPath {
    /// Parse profile_id as Snowflake
    pub fn profile_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.profile_id, "profile_id")
    }
}

fn parse_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    raw.parse::<Snowflake>()
        .ok()
        .filter(Snowflake::is_valid)
        .ok_or_else(|| ApiError::invalid_path(format!("Invalid {name} format")))
}
