use crate::recipe_matching::domain::{Category, IngredientQuery, RecipeDetail, RecipeSummary};
use crate::shared::Result;
use async_trait::async_trait;

/// RecipeCatalog port for querying a recipe catalog
///
/// This port abstracts the recipe source (TheMealDB API, the bundled
/// regional dataset, test doubles). Listing calls return an empty vector
/// when nothing matches; "nothing matched" is never an error.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the matcher can run one lookup
/// per ingredient concurrently against a shared catalog.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Lists the browsable categories
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Lists the recipes of one category
    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>>;

    /// Lists the recipes that use one ingredient
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The API returns an error status code
    /// - The response cannot be parsed
    async fn filter_by_ingredient(&self, ingredient: &IngredientQuery)
        -> Result<Vec<RecipeSummary>>;

    /// Searches recipes by name
    async fn search_by_name(&self, text: &str) -> Result<Vec<RecipeSummary>>;

    /// Fetches the full record of one recipe, `None` if the id is unknown
    async fn lookup_recipe(&self, id: &str) -> Result<Option<RecipeDetail>>;
}
