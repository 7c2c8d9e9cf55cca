use crate::recipe_matching::domain::IngredientList;
use crate::recipe_matching::policies::FailurePolicy;
use crate::shared::Result;

/// MatchRequest - request DTO for the ingredient match use case
#[derive(Debug, Clone)]
pub struct MatchRequest {
    /// Deduplicated ingredients in display order
    pub ingredients: IngredientList,
    /// What to do when a lookup fails
    pub failure_policy: FailurePolicy,
}

impl MatchRequest {
    pub fn new(ingredients: IngredientList, failure_policy: FailurePolicy) -> Self {
        Self {
            ingredients,
            failure_policy,
        }
    }

    /// Builds a request from raw names; duplicates are dropped
    ///
    /// # Errors
    /// Returns an error if any name is empty after trimming
    pub fn from_names<I, S>(names: I, failure_policy: FailurePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(IngredientList::from_names(names)?, failure_policy))
    }
}
