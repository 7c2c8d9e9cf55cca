use async_trait::async_trait;
use recipe_finder::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock RecipeCatalog for testing
///
/// Ingredients map to recipe ids; every `filter_by_ingredient` call is
/// recorded. Individual ingredients can be made to fail or to answer late.
#[derive(Default, Clone)]
pub struct MockRecipeCatalog {
    by_ingredient: HashMap<String, Vec<RecipeSummary>>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockRecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(mut self, ingredient: &str, ids: &[&str]) -> Self {
        let recipes = ids
            .iter()
            .map(|id| RecipeSummary::new(*id, format!("Recipe {}", id), None))
            .collect();
        self.by_ingredient.insert(ingredient.to_string(), recipes);
        self
    }

    pub fn with_failure(mut self, ingredient: &str) -> Self {
        self.failing.insert(ingredient.to_string());
        self
    }

    pub fn with_delay(mut self, ingredient: &str, delay: Duration) -> Self {
        self.delays.insert(ingredient.to_string(), delay);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl RecipeCatalog for MockRecipeCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(vec![Category::new("Chicken", None), Category::new("Seafood", None)])
    }

    async fn filter_by_category(&self, _category: &str) -> Result<Vec<RecipeSummary>> {
        Ok(Vec::new())
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &IngredientQuery,
    ) -> Result<Vec<RecipeSummary>> {
        let name = ingredient.as_str().to_string();
        self.lookups.lock().unwrap().push(name.clone());

        if let Some(delay) = self.delays.get(&name) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&name) {
            anyhow::bail!("Mock lookup failure for {}", name);
        }
        Ok(self.by_ingredient.get(&name).cloned().unwrap_or_default())
    }

    async fn search_by_name(&self, _text: &str) -> Result<Vec<RecipeSummary>> {
        Ok(Vec::new())
    }

    async fn lookup_recipe(&self, _id: &str) -> Result<Option<RecipeDetail>> {
        Ok(None)
    }
}
