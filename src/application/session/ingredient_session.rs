use crate::recipe_matching::domain::{IngredientList, IngredientQuery, MatchResult};
use crate::shared::Result;

/// A snapshot of the ingredient list taken when it changed
///
/// Hand the ingredients to the matcher and give the result back to
/// [`IngredientSession::apply`] together with `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationTicket {
    pub generation: u64,
    pub ingredients: Vec<IngredientQuery>,
}

/// IngredientSession - owns the working ingredient set and the last applied result
///
/// Every mutation bumps the generation. A result evaluated for an older
/// generation is dropped by [`apply`](Self::apply), so a slow evaluation can
/// never overwrite the suggestions of a newer one.
#[derive(Debug, Default)]
pub struct IngredientSession {
    ingredients: IngredientList,
    generation: u64,
    current: Option<MatchResult>,
}

impl IngredientSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient
    ///
    /// Returns `Ok(None)` for a duplicate; the list and generation stay untouched.
    ///
    /// # Errors
    /// Returns an error if the name is empty after trimming
    pub fn add(&mut self, raw: &str) -> Result<Option<EvaluationTicket>> {
        if self.ingredients.add(raw)? {
            Ok(Some(self.next_ticket()))
        } else {
            Ok(None)
        }
    }

    /// Removes an ingredient by name; `None` if it was not in the list
    pub fn remove(&mut self, name: &str) -> Option<EvaluationTicket> {
        self.ingredients.remove(name)?;
        Some(self.next_ticket())
    }

    /// Removes an ingredient by zero-based position
    pub fn remove_at(&mut self, index: usize) -> Option<EvaluationTicket> {
        self.ingredients.remove_at(index)?;
        Some(self.next_ticket())
    }

    /// Empties the list; `None` if it was already empty
    pub fn clear(&mut self) -> Option<EvaluationTicket> {
        if self.ingredients.is_empty() {
            return None;
        }
        self.ingredients.clear();
        Some(self.next_ticket())
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies an evaluation result
    ///
    /// Returns `false` and drops the result when `generation` is not the latest.
    pub fn apply(&mut self, generation: u64, result: MatchResult) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                latest = self.generation,
                "dropping stale evaluation"
            );
            return false;
        }
        self.current = Some(result);
        true
    }

    /// The last applied result, if any
    pub fn suggestions(&self) -> Option<&MatchResult> {
        self.current.as_ref()
    }

    fn next_ticket(&mut self) -> EvaluationTicket {
        self.generation += 1;
        EvaluationTicket {
            generation: self.generation,
            ingredients: self.ingredients.to_vec(),
        }
    }
}
