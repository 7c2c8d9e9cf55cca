use crate::recipe_matching::domain::MatchResult;
use chrono::Utc;

/// MatchResponse - response DTO of the ingredient match use case
#[derive(Debug, Clone)]
pub struct MatchResponse {
    pub result: MatchResult,
    /// RFC 3339 time at which the lookups were joined
    pub retrieved_at: String,
}

impl MatchResponse {
    pub fn new(result: MatchResult) -> Self {
        Self {
            result,
            retrieved_at: Utc::now().to_rfc3339(),
        }
    }
}
