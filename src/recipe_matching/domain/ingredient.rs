use crate::shared::error::RecipeError;
use crate::shared::Result;
use serde::Serialize;

/// Maximum length for an ingredient name (security limit)
const MAX_INGREDIENT_LENGTH: usize = 100;

/// NewType wrapper for a user-entered ingredient name
///
/// Always stored trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IngredientQuery(String);

impl IngredientQuery {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(RecipeError::InvalidIngredient {
                reason: "Ingredient name cannot be empty".to_string(),
            }
            .into());
        }

        if trimmed.len() > MAX_INGREDIENT_LENGTH {
            return Err(RecipeError::InvalidIngredient {
                reason: format!(
                    "Ingredient name is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_INGREDIENT_LENGTH
                ),
            }
            .into());
        }

        if trimmed.chars().any(char::is_control) {
            return Err(RecipeError::InvalidIngredient {
                reason: "Ingredient name contains control characters".to_string(),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IngredientQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user's working set of ingredients
///
/// Insertion order is display order. Names are unique by exact match after
/// trimming; adding a name that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<IngredientQuery>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from raw names, silently dropping duplicates
    ///
    /// # Errors
    /// Returns an error if any name is empty or otherwise invalid
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.add(name.as_ref())?;
        }
        Ok(list)
    }

    /// Adds an ingredient
    ///
    /// # Returns
    /// `Ok(true)` when the ingredient was added, `Ok(false)` when it was
    /// already present
    pub fn add(&mut self, raw: &str) -> Result<bool> {
        let query = IngredientQuery::new(raw)?;
        if self.items.contains(&query) {
            return Ok(false);
        }
        self.items.push(query);
        Ok(true)
    }

    /// Removes an ingredient by name (trimmed, exact match)
    pub fn remove(&mut self, name: &str) -> Option<IngredientQuery> {
        let position = self.items.iter().position(|q| q.as_str() == name.trim())?;
        Some(self.items.remove(position))
    }

    /// Removes the ingredient at a zero-based display position
    pub fn remove_at(&mut self, index: usize) -> Option<IngredientQuery> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|q| q.as_str() == name.trim())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientQuery> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[IngredientQuery] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<IngredientQuery> {
        self.items.clone()
    }
}
