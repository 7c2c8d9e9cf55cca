use crate::recipe_matching::domain::RecipeSummary;
use std::collections::{HashMap, HashSet};

/// MatchAccumulator - per-evaluation hit counts keyed by recipe id
///
/// Entries keep first-seen order. A recipe is counted at most once per
/// lookup response, so after `n` recorded lookups every hit count is `<= n`.
/// Writes happen on one thread after all lookups have been joined.
#[derive(Debug, Default)]
pub struct MatchAccumulator {
    entries: Vec<(RecipeSummary, usize)>,
    index: HashMap<String, usize>,
    lookups_recorded: usize,
}

impl MatchAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one ingredient lookup response
    pub fn record_lookup(&mut self, recipes: Vec<RecipeSummary>) {
        self.lookups_recorded += 1;
        let mut seen_in_response = HashSet::new();

        for recipe in recipes {
            if !seen_in_response.insert(recipe.id().to_string()) {
                continue;
            }

            match self.index.get(recipe.id()) {
                Some(&position) => self.entries[position].1 += 1,
                None => {
                    self.index.insert(recipe.id().to_string(), self.entries.len());
                    self.entries.push((recipe, 1));
                }
            }
        }
    }

    pub fn hit_count(&self, recipe_id: &str) -> usize {
        self.index
            .get(recipe_id)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    pub fn lookups_recorded(&self) -> usize {
        self.lookups_recorded
    }

    /// Number of distinct recipes seen so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the accumulator, keeping recipes hit exactly `required` times
    ///
    /// `required == 0` keeps nothing.
    pub fn into_matches(self, required: usize) -> Vec<RecipeSummary> {
        if required == 0 {
            return Vec::new();
        }
        self.entries
            .into_iter()
            .filter(|(_, hits)| *hits == required)
            .map(|(recipe, _)| recipe)
            .collect()
    }
}
