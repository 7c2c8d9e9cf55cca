use crate::application::dto::{ListingSource, RecipeListing};
use crate::application::session::SearchDebouncer;
use crate::ports::outbound::RecipeCatalog;
use crate::recipe_matching::domain::{Category, RecipeDetail};
use crate::shared::Result;

/// Category listed when the caller does not pick one
pub const DEFAULT_CATEGORY: &str = "Chicken";

/// BrowseCatalogUseCase - category listings, name search and recipe details
///
/// # Type Parameters
/// * `C` - RecipeCatalog implementation
pub struct BrowseCatalogUseCase<C> {
    catalog: C,
    default_category: String,
}

impl<C: RecipeCatalog> BrowseCatalogUseCase<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Overrides the category used when none is given
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.catalog.list_categories().await
    }

    /// Lists one category, or the default category when `category` is `None` or blank
    pub async fn recipes_in_category(&self, category: Option<&str>) -> Result<RecipeListing> {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(self.default_category.as_str());

        tracing::debug!(category, "listing category");
        let recipes = self.catalog.filter_by_category(category).await?;
        Ok(RecipeListing::new(
            ListingSource::Category(category.to_string()),
            recipes,
        ))
    }

    /// Searches by name
    ///
    /// Blank text falls back to the default category's listing.
    pub async fn search(&self, text: &str) -> Result<RecipeListing> {
        let text = text.trim();
        if text.is_empty() {
            return self.recipes_in_category(None).await;
        }

        tracing::debug!(text, "searching by name");
        let recipes = self.catalog.search_by_name(text).await?;
        Ok(RecipeListing::new(
            ListingSource::Search(text.to_string()),
            recipes,
        ))
    }

    /// Debounced [`search`](Self::search) for keystroke-driven callers
    ///
    /// Returns `None` when a newer keystroke superseded this one.
    pub async fn search_as_you_type(
        &self,
        debouncer: &SearchDebouncer,
        text: &str,
    ) -> Option<Result<RecipeListing>> {
        debouncer.run(|| self.search(text)).await
    }

    /// Full record of one recipe, `None` if the catalog does not know the id
    pub async fn recipe_detail(&self, id: &str) -> Result<Option<RecipeDetail>> {
        let id = id.trim();
        if id.is_empty() {
            anyhow::bail!("Recipe id must not be empty");
        }
        self.catalog.lookup_recipe(id).await
    }
}
