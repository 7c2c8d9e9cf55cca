use crate::application::dto::{MatchRequest, MatchResponse};
use crate::application::session::EvaluationTicket;
use crate::ports::outbound::{ProgressReporter, RecipeCatalog};
use crate::recipe_matching::domain::{IngredientQuery, MatchResult};
use crate::recipe_matching::policies::FailurePolicy;
use crate::recipe_matching::services::{IngredientIntersection, LookupOutcome};
use crate::shared::Result;
use futures::future::join_all;
use std::sync::atomic::{AtomicUsize, Ordering};

/// MatchIngredientsUseCase - finds the recipes that use every given ingredient
///
/// Issues one catalog lookup per ingredient, all in flight at once, joins
/// them, and only then reduces the responses on a single task. Nothing is
/// cached between evaluations.
///
/// # Type Parameters
/// * `C` - RecipeCatalog implementation
/// * `PR` - ProgressReporter implementation
pub struct MatchIngredientsUseCase<C, PR> {
    catalog: C,
    progress_reporter: PR,
}

impl<C, PR> MatchIngredientsUseCase<C, PR>
where
    C: RecipeCatalog,
    PR: ProgressReporter,
{
    /// Creates a new MatchIngredientsUseCase with injected dependencies
    pub fn new(catalog: C, progress_reporter: PR) -> Self {
        Self {
            catalog,
            progress_reporter,
        }
    }

    /// Executes the match use case
    ///
    /// # Arguments
    /// * `request` - Ingredients plus the policy for failed lookups
    ///
    /// # Returns
    /// MatchResponse with the matched recipes and the retrieval timestamp
    pub async fn execute(&self, request: MatchRequest) -> Result<MatchResponse> {
        if !request.ingredients.is_empty() {
            self.progress_reporter.report(&format!(
                "🔍 Looking up recipes for {} ingredient(s)...",
                request.ingredients.len()
            ));
        }

        let result = self
            .evaluate(request.ingredients.as_slice(), request.failure_policy)
            .await;
        self.report_outcome(&result);

        Ok(MatchResponse::new(result?))
    }

    /// Evaluates the ingredients captured by a session ticket
    ///
    /// Returns the ticket's generation alongside the result so the caller
    /// can hand both to `IngredientSession::apply`.
    pub async fn evaluate_ticket(
        &self,
        ticket: &EvaluationTicket,
        policy: FailurePolicy,
    ) -> (u64, Result<MatchResult>) {
        let result = self.evaluate(&ticket.ingredients, policy).await;
        self.report_outcome(&result);
        (ticket.generation, result)
    }

    /// Looks up every ingredient concurrently and intersects the responses
    ///
    /// An empty slice yields an empty result without touching the catalog.
    ///
    /// # Errors
    /// See [`IngredientIntersection::reduce`]
    pub async fn evaluate(
        &self,
        ingredients: &[IngredientQuery],
        policy: FailurePolicy,
    ) -> Result<MatchResult> {
        if ingredients.is_empty() {
            return Ok(MatchResult::empty());
        }

        let total = ingredients.len();
        let completed = AtomicUsize::new(0);

        let lookups = ingredients.iter().map(|ingredient| {
            let completed = &completed;
            async move {
                tracing::debug!(ingredient = %ingredient, "catalog lookup started");
                let response = self.catalog.filter_by_ingredient(ingredient).await;
                match &response {
                    Ok(recipes) => tracing::debug!(
                        ingredient = %ingredient,
                        recipes = recipes.len(),
                        "catalog lookup finished"
                    ),
                    Err(e) => tracing::debug!(
                        ingredient = %ingredient,
                        error = %e,
                        "catalog lookup failed"
                    ),
                }

                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                self.progress_reporter
                    .report_progress(done, total, Some(ingredient.as_str()));

                LookupOutcome::new(ingredient.clone(), response)
            }
        });

        // Join first; the reduction below runs on this task only
        let outcomes = join_all(lookups).await;

        IngredientIntersection::reduce(outcomes, policy)
    }

    fn report_outcome(&self, result: &Result<MatchResult>) {
        match result {
            Ok(result) if result.lookups_issued() == 0 => {}
            Ok(result) => {
                if result.is_partial() {
                    let failed: Vec<&str> = result
                        .failed_lookups()
                        .iter()
                        .map(|f| f.ingredient.as_str())
                        .collect();
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Partial result. Lookup failed for: {}",
                        failed.join(", ")
                    ));
                }
                let matched_on = result.ingredients().len() - result.failed_lookups().len();
                self.progress_reporter.report_completion(&format!(
                    "✅ {} recipe(s) use all {} ingredient(s)",
                    result.len(),
                    matched_on
                ));
            }
            Err(_) => self
                .progress_reporter
                .report_error("❌ Ingredient lookup failed"),
        }
    }
}
