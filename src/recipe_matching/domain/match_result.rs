use super::{IngredientQuery, RecipeSummary};
use serde::Serialize;

/// An ingredient whose catalog lookup failed during an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedLookup {
    pub ingredient: IngredientQuery,
    pub reason: String,
}

/// Recipes that contain every ingredient of one evaluation
///
/// A new value is produced per evaluation; nothing is updated in place.
/// When `failed_lookups` is non-empty the result is partial: the
/// intersection only covers the ingredients whose lookups succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    ingredients: Vec<IngredientQuery>,
    recipes: Vec<RecipeSummary>,
    failed_lookups: Vec<FailedLookup>,
    lookups_issued: usize,
}

impl MatchResult {
    pub fn new(
        ingredients: Vec<IngredientQuery>,
        recipes: Vec<RecipeSummary>,
        failed_lookups: Vec<FailedLookup>,
        lookups_issued: usize,
    ) -> Self {
        Self {
            ingredients,
            recipes,
            failed_lookups,
            lookups_issued,
        }
    }

    /// Result for an empty ingredient list: no recipes, no lookups
    pub fn empty() -> Self {
        Self::new(vec![], vec![], vec![], 0)
    }

    pub fn ingredients(&self) -> &[IngredientQuery] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    pub fn into_recipes(self) -> Vec<RecipeSummary> {
        self.recipes
    }

    pub fn failed_lookups(&self) -> &[FailedLookup] {
        &self.failed_lookups
    }

    pub fn lookups_issued(&self) -> usize {
        self.lookups_issued
    }

    pub fn is_partial(&self) -> bool {
        !self.failed_lookups.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.recipes.iter().any(|r| r.id() == recipe_id)
    }

    pub fn recipe_ids(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.id()).collect()
    }
}
