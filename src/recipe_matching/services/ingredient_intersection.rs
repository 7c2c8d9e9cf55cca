use super::MatchAccumulator;
use crate::recipe_matching::domain::{FailedLookup, IngredientQuery, MatchResult, RecipeSummary};
use crate::recipe_matching::policies::FailurePolicy;
use crate::shared::error::RecipeError;
use crate::shared::Result;

/// The joined response of one per-ingredient catalog lookup
#[derive(Debug)]
pub struct LookupOutcome {
    pub ingredient: IngredientQuery,
    pub response: Result<Vec<RecipeSummary>>,
}

impl LookupOutcome {
    pub fn new(ingredient: IngredientQuery, response: Result<Vec<RecipeSummary>>) -> Self {
        Self {
            ingredient,
            response,
        }
    }
}

/// IngredientIntersection - reduces joined lookups into a MatchResult
///
/// Pure strict-AND intersection: a recipe is kept only when every counted
/// lookup returned it. Outcomes are reduced in the order given, so the
/// result keeps the catalog's first-seen order.
pub struct IngredientIntersection;

impl IngredientIntersection {
    /// Reduces lookup outcomes under the given failure policy
    ///
    /// # Errors
    /// - `Strict`: the first failed lookup, as `RecipeError::CatalogLookup`
    /// - `Partial`: only when every lookup failed
    pub fn reduce(outcomes: Vec<LookupOutcome>, policy: FailurePolicy) -> Result<MatchResult> {
        if outcomes.is_empty() {
            return Ok(MatchResult::empty());
        }

        let lookups_issued = outcomes.len();
        let ingredients: Vec<IngredientQuery> =
            outcomes.iter().map(|o| o.ingredient.clone()).collect();

        let mut accumulator = MatchAccumulator::new();
        let mut failed_lookups = Vec::new();

        for outcome in outcomes {
            match outcome.response {
                Ok(recipes) => accumulator.record_lookup(recipes),
                Err(e) => {
                    let failure = FailedLookup {
                        ingredient: outcome.ingredient,
                        reason: format!("{:#}", e),
                    };
                    if policy == FailurePolicy::Strict {
                        return Err(Self::lookup_error(failure));
                    }
                    tracing::warn!(
                        ingredient = %failure.ingredient,
                        reason = %failure.reason,
                        "ingredient lookup failed; continuing with partial result"
                    );
                    failed_lookups.push(failure);
                }
            }
        }

        if failed_lookups.len() == lookups_issued {
            return Err(Self::lookup_error(failed_lookups.swap_remove(0)));
        }

        let required = accumulator.lookups_recorded();
        let recipes = accumulator.into_matches(required);

        Ok(MatchResult::new(
            ingredients,
            recipes,
            failed_lookups,
            lookups_issued,
        ))
    }

    fn lookup_error(failure: FailedLookup) -> anyhow::Error {
        RecipeError::CatalogLookup {
            ingredient: failure.ingredient.to_string(),
            details: failure.reason,
        }
        .into()
    }
}
