use crate::ports::outbound::RecipeCatalog;
use crate::recipe_matching::domain::regional::ALL_CUISINES;
use crate::recipe_matching::domain::{
    Category, IngredientQuery, RecipeDetail, RecipeSummary, RegionalDataset, RegionalRecipe,
};
use crate::shared::Result;
use async_trait::async_trait;

/// BundledCatalog adapter serving the regional dataset offline
///
/// Cuisines act as categories, with `All` selecting every recipe.
/// Ingredient filtering is a case-insensitive containment match on
/// ingredient names.
pub struct BundledCatalog {
    dataset: RegionalDataset,
}

impl BundledCatalog {
    pub fn new(dataset: RegionalDataset) -> Self {
        Self { dataset }
    }

    /// Catalog over the dataset compiled into the binary
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(RegionalDataset::bundled()?))
    }

    /// Category to list when none is given
    pub fn default_category() -> &'static str {
        ALL_CUISINES
    }

    fn summaries(recipes: Vec<&RegionalRecipe>) -> Vec<RecipeSummary> {
        recipes.into_iter().map(RegionalRecipe::summary).collect()
    }
}

#[async_trait]
impl RecipeCatalog for BundledCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.dataset.cuisines().to_vec())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>> {
        Ok(Self::summaries(self.dataset.recipes_for(category)))
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &IngredientQuery,
    ) -> Result<Vec<RecipeSummary>> {
        Ok(Self::summaries(
            self.dataset.with_ingredient(ingredient.as_str()),
        ))
    }

    async fn search_by_name(&self, text: &str) -> Result<Vec<RecipeSummary>> {
        Ok(Self::summaries(self.dataset.search(text)))
    }

    async fn lookup_recipe(&self, id: &str) -> Result<Option<RecipeDetail>> {
        Ok(self.dataset.find(id).map(RegionalRecipe::detail))
    }
}
