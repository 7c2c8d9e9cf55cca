use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recipe record as returned by a catalog listing
///
/// Carries the identifier, display name and thumbnail the client needs, plus
/// every other field the catalog sent, untouched, so detail screens can use
/// them later. Field names follow TheMealDB wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RecipeSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>, thumbnail: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail,
            extra: Map::new(),
        }
    }

    /// Attaches an opaque field that is passed through unchanged
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
