//! Bundled dataset of regional Indian recipes.
//!
//! The dataset ships inside the binary and can be replaced by a file with
//! the same layout. It backs the offline catalog.

use super::{Category, IngredientLine, RecipeDetail, RecipeSummary};
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Name of the pseudo-cuisine that selects every recipe
pub const ALL_CUISINES: &str = "All";

const BUNDLED_DATASET: &str = include_str!("../../../data/regional_recipes.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionalIngredient {
    pub name: String,
    #[serde(default)]
    pub measure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionalRecipe {
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    pub cuisine: String,
    #[serde(default)]
    pub ingredients: Vec<RegionalIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube_url: Option<String>,
}

impl RegionalRecipe {
    /// Listing form, shaped like a catalog record with the cuisine passed through
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary::new(self.id.clone(), self.name.clone(), self.thumbnail.clone())
            .with_extra("cuisine", Value::String(self.cuisine.clone()))
    }

    pub fn detail(&self) -> RecipeDetail {
        RecipeDetail {
            id: self.id.clone(),
            name: self.name.clone(),
            category: None,
            area: Some(self.cuisine.clone()),
            thumbnail: self.thumbnail.clone(),
            ingredients: self
                .ingredients
                .iter()
                .map(|i| IngredientLine::new(i.name.clone(), i.measure.clone()))
                .collect(),
            instructions: self.instructions.clone(),
            tags: vec![],
            youtube_url: self.youtube_url.clone().filter(|u| !u.trim().is_empty()),
            source_url: None,
        }
    }

    /// Case-insensitive containment match against ingredient names
    pub fn uses_ingredient(&self, ingredient: &str) -> bool {
        let needle = ingredient.trim().to_lowercase();
        !needle.is_empty()
            && self
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionalDataset {
    cuisines: Vec<Category>,
    recipes: Vec<RegionalRecipe>,
}

impl RegionalDataset {
    /// The dataset compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Parses and validates a dataset document
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, a recipe has an empty id or
    /// name, or two recipes share an id
    pub fn from_json(content: &str) -> Result<Self> {
        let dataset: RegionalDataset = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (i, recipe) in self.recipes.iter().enumerate() {
            if recipe.id.trim().is_empty() {
                anyhow::bail!("recipes[{}].id must not be empty", i);
            }
            if recipe.name.trim().is_empty() {
                anyhow::bail!("recipes[{}].strMeal must not be empty", i);
            }
            if !seen.insert(recipe.id.as_str()) {
                anyhow::bail!("duplicate recipe id '{}'", recipe.id);
            }
        }
        Ok(())
    }

    pub fn cuisines(&self) -> &[Category] {
        &self.cuisines
    }

    pub fn recipes(&self) -> &[RegionalRecipe] {
        &self.recipes
    }

    /// Recipes of one cuisine; `All` selects everything
    pub fn recipes_for(&self, cuisine: &str) -> Vec<&RegionalRecipe> {
        let cuisine = cuisine.trim();
        if cuisine.eq_ignore_ascii_case(ALL_CUISINES) {
            return self.recipes.iter().collect();
        }
        self.recipes
            .iter()
            .filter(|r| r.cuisine.eq_ignore_ascii_case(cuisine))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&RegionalRecipe> {
        self.recipes.iter().find(|r| r.id == id.trim())
    }

    pub fn with_ingredient(&self, ingredient: &str) -> Vec<&RegionalRecipe> {
        self.recipes
            .iter()
            .filter(|r| r.uses_ingredient(ingredient))
            .collect()
    }

    /// Case-insensitive containment match on recipe names
    pub fn search(&self, text: &str) -> Vec<&RegionalRecipe> {
        let needle = text.trim().to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }
}
