use crate::application::dto::{AuthOutcome, ListingSource, MatchResponse, RecipeListing};
use crate::ports::outbound::RecipeFormatter;
use crate::recipe_matching::domain::{Category, IngredientQuery, RecipeDetail, RecipeSummary};
use crate::shared::Result;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct MatchDocument<'a> {
    ingredients: &'a [IngredientQuery],
    partial: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failed_ingredients: Vec<FailedIngredient<'a>>,
    lookups_issued: usize,
    retrieved_at: &'a str,
    count: usize,
    meals: &'a [RecipeSummary],
}

#[derive(Debug, Serialize)]
struct FailedIngredient<'a> {
    ingredient: &'a str,
    reason: &'a str,
}

#[derive(Debug, Serialize)]
struct ListingDocument<'a> {
    source: SourceRef<'a>,
    count: usize,
    meals: &'a [RecipeSummary],
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
enum SourceRef<'a> {
    Category(&'a str),
    Search(&'a str),
}

#[derive(Debug, Serialize)]
struct CategoriesDocument<'a> {
    categories: &'a [Category],
}

#[derive(Debug, Serialize)]
struct DetailDocument<'a> {
    #[serde(flatten)]
    detail: &'a RecipeDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    youtube_video_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct AuthDocument<'a> {
    action: String,
    email: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
}

/// JsonFormatter adapter emitting pretty-printed JSON
///
/// Recipe summaries keep the catalog's own field names (`idMeal`,
/// `strMeal`, ...) and every passthrough field.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render<T: Serialize>(document: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(document)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFormatter for JsonFormatter {
    fn format_matches(&self, response: &MatchResponse) -> Result<String> {
        let result = &response.result;
        Self::render(&MatchDocument {
            ingredients: result.ingredients(),
            partial: result.is_partial(),
            failed_ingredients: result
                .failed_lookups()
                .iter()
                .map(|f| FailedIngredient {
                    ingredient: f.ingredient.as_str(),
                    reason: &f.reason,
                })
                .collect(),
            lookups_issued: result.lookups_issued(),
            retrieved_at: &response.retrieved_at,
            count: result.len(),
            meals: result.recipes(),
        })
    }

    fn format_listing(&self, listing: &RecipeListing) -> Result<String> {
        let source = match &listing.source {
            ListingSource::Category(name) => SourceRef::Category(name),
            ListingSource::Search(text) => SourceRef::Search(text),
        };
        Self::render(&ListingDocument {
            source,
            count: listing.recipes.len(),
            meals: &listing.recipes,
        })
    }

    fn format_categories(&self, categories: &[Category]) -> Result<String> {
        Self::render(&CategoriesDocument { categories })
    }

    fn format_detail(&self, detail: &RecipeDetail) -> Result<String> {
        Self::render(&DetailDocument {
            detail,
            youtube_video_id: detail.youtube_video_id(),
        })
    }

    fn format_auth(&self, outcome: &AuthOutcome) -> Result<String> {
        Self::render(&AuthDocument {
            action: outcome.action.to_string(),
            email: &outcome.email,
            message: &outcome.message,
            data: outcome.data.as_ref(),
        })
    }
}
