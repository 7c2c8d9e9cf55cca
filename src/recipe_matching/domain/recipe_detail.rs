use serde::Serialize;
use url::Url;

/// One ingredient line of a recipe, e.g. "Chicken" / "500g"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, measure: Option<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.filter(|m| !m.trim().is_empty()),
        }
    }
}

/// Full recipe record used by the detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl RecipeDetail {
    /// Splits a free-text instruction block into non-empty steps
    pub fn split_instructions(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    /// Splits a comma-separated tag string ("Meat,Casserole")
    pub fn split_tags(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    }

    /// The YouTube video id for embedding, if the recipe links a video
    pub fn youtube_video_id(&self) -> Option<String> {
        self.youtube_url.as_deref().and_then(youtube_video_id)
    }
}

/// Extracts the video id from a YouTube URL
///
/// Handles `watch?v=<id>` links and `youtu.be/<id>` short links.
pub fn youtube_video_id(link: &str) -> Option<String> {
    let parsed = Url::parse(link.trim()).ok()?;

    if let Some((_, id)) = parsed.query_pairs().find(|(key, _)| key == "v") {
        return (!id.is_empty()).then(|| id.into_owned());
    }

    if parsed.host_str() == Some("youtu.be") {
        return parsed
            .path_segments()?
            .next()
            .filter(|segment| !segment.is_empty())
            .map(String::from);
    }

    None
}
