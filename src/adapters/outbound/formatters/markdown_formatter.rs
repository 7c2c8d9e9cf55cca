use crate::application::dto::{AuthOutcome, MatchResponse, RecipeListing};
use crate::ports::outbound::RecipeFormatter;
use crate::recipe_matching::domain::{Category, RecipeDetail, RecipeSummary};
use crate::shared::Result;
use serde_json::Value;

/// Markdown table header for recipe listings
const RECIPE_TABLE_HEADER: &str = "| # | ID | Recipe | Thumbnail |\n";

/// Markdown table separator line for recipe listings
const RECIPE_TABLE_SEPARATOR: &str = "|---|----|--------|-----------|\n";

const CATEGORY_TABLE_HEADER: &str = "| Category | Description |\n";
const CATEGORY_TABLE_SEPARATOR: &str = "|----------|-------------|\n";

const INGREDIENT_TABLE_HEADER: &str = "| Ingredient | Measure |\n";
const INGREDIENT_TABLE_SEPARATOR: &str = "|------------|---------|\n";

/// Longest category description shown in the table
const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// MarkdownFormatter adapter rendering human-readable Markdown
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }

    fn thumbnail_cell(url: Option<&str>) -> String {
        match url {
            Some(url) if !url.is_empty() => format!("[image]({})", url),
            _ => String::new(),
        }
    }

    fn preview(text: &str) -> String {
        let text = text.trim();
        if text.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
            return text.to_string();
        }
        let cut: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_recipes(&self, output: &mut String, recipes: &[RecipeSummary]) {
        if recipes.is_empty() {
            output.push_str("_No recipes found._\n");
            return;
        }

        output.push_str(RECIPE_TABLE_HEADER);
        output.push_str(RECIPE_TABLE_SEPARATOR);
        for (i, recipe) in recipes.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                Self::escape_markdown_table_cell(recipe.id()),
                Self::escape_markdown_table_cell(recipe.name()),
                Self::thumbnail_cell(recipe.thumbnail())
            ));
        }
    }

    fn render_failed_lookups(&self, output: &mut String, response: &MatchResponse) {
        let failed = response.result.failed_lookups();
        if failed.is_empty() {
            return;
        }
        output.push_str(
            "> ⚠️ **Partial result.** These lookups failed and were left out of the intersection:\n",
        );
        for lookup in failed {
            output.push_str(&format!(
                "> - `{}`: {}\n",
                lookup.ingredient,
                lookup.reason.replace('\n', " ")
            ));
        }
        output.push('\n');
    }

    fn render_ingredients(&self, output: &mut String, detail: &RecipeDetail) {
        output.push_str("## Ingredients\n\n");
        if detail.ingredients.is_empty() {
            output.push_str("_No ingredients listed._\n\n");
            return;
        }
        output.push_str(INGREDIENT_TABLE_HEADER);
        output.push_str(INGREDIENT_TABLE_SEPARATOR);
        for line in &detail.ingredients {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&line.name),
                Self::escape_markdown_table_cell(line.measure.as_deref().unwrap_or(""))
            ));
        }
        output.push('\n');
    }

    fn render_instructions(&self, output: &mut String, detail: &RecipeDetail) {
        output.push_str("## Instructions\n\n");
        if detail.instructions.is_empty() {
            output.push_str("_No instructions provided._\n");
            return;
        }
        for (i, step) in detail.instructions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFormatter for MarkdownFormatter {
    fn format_matches(&self, response: &MatchResponse) -> Result<String> {
        let result = &response.result;
        let mut output = String::from("# Recipe Matches\n\n");

        if result.ingredients().is_empty() {
            output.push_str("_No ingredients given._\n");
            return Ok(output);
        }

        let ingredients: Vec<String> = result
            .ingredients()
            .iter()
            .map(|i| format!("`{}`", i))
            .collect();
        output.push_str(&format!("**Ingredients:** {}\n\n", ingredients.join(", ")));
        output.push_str(&format!(
            "Found {} recipe(s) using every ingredient ({} lookup(s), retrieved {}).\n\n",
            result.len(),
            result.lookups_issued(),
            response.retrieved_at
        ));

        self.render_failed_lookups(&mut output, response);
        self.render_recipes(&mut output, result.recipes());
        Ok(output)
    }

    fn format_listing(&self, listing: &RecipeListing) -> Result<String> {
        let mut output = format!("# {}\n\n", listing.source);
        output.push_str(&format!("{} recipe(s)\n\n", listing.recipes.len()));
        self.render_recipes(&mut output, &listing.recipes);
        Ok(output)
    }

    fn format_categories(&self, categories: &[Category]) -> Result<String> {
        let mut output = String::from("# Categories\n\n");
        output.push_str(CATEGORY_TABLE_HEADER);
        output.push_str(CATEGORY_TABLE_SEPARATOR);
        for category in categories {
            let description = category.description.as_deref().unwrap_or("");
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&category.name),
                Self::escape_markdown_table_cell(&Self::preview(description))
            ));
        }
        Ok(output)
    }

    fn format_detail(&self, detail: &RecipeDetail) -> Result<String> {
        let mut output = format!("# {}\n\n", detail.name);

        let mut facts = vec![format!("- **ID:** {}", detail.id)];
        if let Some(category) = &detail.category {
            facts.push(format!("- **Category:** {}", category));
        }
        if let Some(area) = &detail.area {
            facts.push(format!("- **Area:** {}", area));
        }
        if !detail.tags.is_empty() {
            facts.push(format!("- **Tags:** {}", detail.tags.join(", ")));
        }
        if let Some(url) = &detail.youtube_url {
            match detail.youtube_video_id() {
                Some(id) => facts.push(format!("- **Video:** [{}]({})", id, url)),
                None => facts.push(format!("- **Video:** {}", url)),
            }
        }
        if let Some(source) = &detail.source_url {
            facts.push(format!("- **Source:** {}", source));
        }
        output.push_str(&facts.join("\n"));
        output.push_str("\n\n");

        if let Some(thumbnail) = &detail.thumbnail {
            output.push_str(&format!("![{}]({})\n\n", detail.name, thumbnail));
        }

        self.render_ingredients(&mut output, detail);
        self.render_instructions(&mut output, detail);
        Ok(output)
    }

    fn format_auth(&self, outcome: &AuthOutcome) -> Result<String> {
        let mut output = format!("✅ {} ({})\n", outcome.message, outcome.email);
        match &outcome.data {
            Some(Value::String(data)) => output.push_str(&format!("\n`{}`\n", data)),
            Some(Value::Null) | None => {}
            Some(other) => output.push_str(&format!("\n```json\n{}\n```\n", other)),
        }
        Ok(output)
    }
}
