use crate::recipe_matching::domain::RecipeSummary;

/// Where a listing came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    Category(String),
    Search(String),
}

impl std::fmt::Display for ListingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingSource::Category(name) => write!(f, "Category: {}", name),
            ListingSource::Search(text) => write!(f, "Search: \"{}\"", text),
        }
    }
}

/// RecipeListing - a browse or search result
#[derive(Debug, Clone)]
pub struct RecipeListing {
    pub source: ListingSource,
    pub recipes: Vec<RecipeSummary>,
}

impl RecipeListing {
    pub fn new(source: ListingSource, recipes: Vec<RecipeSummary>) -> Self {
        Self { source, recipes }
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
