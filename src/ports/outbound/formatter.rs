use crate::application::dto::{AuthOutcome, MatchResponse, RecipeListing};
use crate::recipe_matching::domain::{Category, RecipeDetail};
use crate::shared::Result;

/// RecipeFormatter port for rendering results
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait RecipeFormatter {
    /// Formats the result of an ingredient match
    fn format_matches(&self, response: &MatchResponse) -> Result<String>;

    /// Formats a recipe listing (category browse or name search)
    fn format_listing(&self, listing: &RecipeListing) -> Result<String>;

    /// Formats the category list
    fn format_categories(&self, categories: &[Category]) -> Result<String>;

    /// Formats a single recipe
    fn format_detail(&self, detail: &RecipeDetail) -> Result<String>;

    /// Formats the outcome of a register or login call
    fn format_auth(&self, outcome: &AuthOutcome) -> Result<String>;
}
