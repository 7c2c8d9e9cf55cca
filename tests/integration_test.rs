/// Integration tests for the application layer
mod test_utilities;

use recipe_finder::application::dto::{AuthAction, ListingSource};
use recipe_finder::prelude::*;
use recipe_finder::shared::error::RecipeError;
use serde_json::json;
use std::collections::BTreeSet;
use std::time::Duration;
use test_utilities::mocks::*;

fn pantry_catalog() -> MockRecipeCatalog {
    MockRecipeCatalog::new()
        .with_recipes("chicken", &["52795", "52796", "52934", "53050"])
        .with_recipes("rice", &["52796", "52934", "52772"])
        .with_recipes("garlic", &["52934", "52796", "52772", "53050"])
        .with_recipes("saffron", &[])
}

fn queries(names: &[&str]) -> Vec<IngredientQuery> {
    names
        .iter()
        .map(|name| IngredientQuery::new(name).unwrap())
        .collect()
}

fn id_set(result: &MatchResult) -> BTreeSet<String> {
    result
        .recipes()
        .iter()
        .map(|recipe| recipe.id().to_string())
        .collect()
}

#[tokio::test]
async fn test_match_ingredients_happy_path() {
    let catalog = pantry_catalog();
    let progress_reporter = MockProgressReporter::new();
    let use_case = MatchIngredientsUseCase::new(catalog.clone(), progress_reporter.clone());

    let request = MatchRequest::from_names(["chicken", "rice"], FailurePolicy::Strict).unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(
        id_set(&response.result),
        BTreeSet::from(["52796".to_string(), "52934".to_string()])
    );
    assert_eq!(response.result.lookups_issued(), 2);
    assert!(!response.result.is_partial());
    assert_eq!(catalog.lookup_count(), 2);
    assert!(!response.retrieved_at.is_empty());

    let messages = progress_reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("Looking up recipes for 2 ingredient(s)")));
    assert!(messages.iter().any(|m| m.starts_with("Completed:")));
}

#[tokio::test]
async fn test_match_order_does_not_change_result() {
    let use_case = MatchIngredientsUseCase::new(pantry_catalog(), MockProgressReporter::new());

    let forward = use_case
        .evaluate(&queries(&["chicken", "rice", "garlic"]), FailurePolicy::Strict)
        .await
        .unwrap();
    let backward = use_case
        .evaluate(&queries(&["garlic", "rice", "chicken"]), FailurePolicy::Strict)
        .await
        .unwrap();

    assert_eq!(id_set(&forward), id_set(&backward));
    assert_eq!(
        id_set(&forward),
        BTreeSet::from(["52796".to_string(), "52934".to_string()])
    );
}

#[tokio::test]
async fn test_adding_an_ingredient_never_grows_the_result() {
    let use_case = MatchIngredientsUseCase::new(pantry_catalog(), MockProgressReporter::new());

    let mut previous: Option<BTreeSet<String>> = None;
    let mut names = Vec::new();
    for name in ["garlic", "chicken", "rice", "saffron"] {
        names.push(name);
        let result = use_case
            .evaluate(&queries(&names), FailurePolicy::Strict)
            .await
            .unwrap();
        let ids = id_set(&result);
        if let Some(previous) = &previous {
            assert!(ids.is_subset(previous), "{:?} grew from {:?}", ids, previous);
        }
        previous = Some(ids);
    }

    // saffron has no recipes, so the final intersection is empty
    assert!(previous.unwrap().is_empty());
}

#[tokio::test]
async fn test_single_ingredient_returns_its_full_listing() {
    let use_case = MatchIngredientsUseCase::new(pantry_catalog(), MockProgressReporter::new());

    let result = use_case
        .evaluate(&queries(&["garlic"]), FailurePolicy::Strict)
        .await
        .unwrap();

    assert_eq!(result.len(), 4);
    assert_eq!(result.lookups_issued(), 1);
}

#[tokio::test]
async fn test_strict_policy_fails_whole_evaluation() {
    let catalog = pantry_catalog().with_failure("rice");
    let progress_reporter = MockProgressReporter::new();
    let use_case = MatchIngredientsUseCase::new(catalog.clone(), progress_reporter.clone());

    let request = MatchRequest::from_names(["chicken", "rice"], FailurePolicy::Strict).unwrap();
    let error = use_case.execute(request).await.unwrap_err();

    match error.downcast_ref::<RecipeError>() {
        Some(RecipeError::CatalogLookup { ingredient, .. }) => assert_eq!(ingredient, "rice"),
        other => panic!("unexpected error: {:?}", other),
    }
    // every lookup was still issued before the failure surfaced
    assert_eq!(catalog.lookup_count(), 2);
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error:")));
}

#[tokio::test]
async fn test_partial_policy_keeps_successful_lookups() {
    let catalog = pantry_catalog().with_failure("rice");
    let progress_reporter = MockProgressReporter::new();
    let use_case = MatchIngredientsUseCase::new(catalog, progress_reporter.clone());

    let request =
        MatchRequest::from_names(["chicken", "rice", "garlic"], FailurePolicy::Partial).unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert!(response.result.is_partial());
    assert_eq!(response.result.failed_lookups().len(), 1);
    assert_eq!(response.result.failed_lookups()[0].ingredient.as_str(), "rice");
    assert_eq!(
        id_set(&response.result),
        BTreeSet::from([
            "52796".to_string(),
            "52934".to_string(),
            "53050".to_string()
        ])
    );
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Partial result")));
}

#[tokio::test(start_paused = true)]
async fn test_lookups_run_concurrently() {
    let catalog = pantry_catalog()
        .with_delay("chicken", Duration::from_secs(2))
        .with_delay("rice", Duration::from_secs(2))
        .with_delay("garlic", Duration::from_secs(2));
    let use_case = MatchIngredientsUseCase::new(catalog, MockProgressReporter::new());

    let started = tokio::time::Instant::now();
    use_case
        .evaluate(&queries(&["chicken", "rice", "garlic"]), FailurePolicy::Strict)
        .await
        .unwrap();

    // sequential lookups would take six seconds
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_stale_evaluation_is_discarded() {
    let catalog = pantry_catalog().with_delay("saffron", Duration::from_secs(5));
    let use_case = MatchIngredientsUseCase::new(catalog, MockProgressReporter::new());
    let mut session = IngredientSession::new();

    session.add("chicken").unwrap();
    // the slow evaluation still includes saffron
    let slow_ticket = session.add("saffron").unwrap().unwrap();
    let fast_ticket = session.remove("saffron").unwrap();

    let ((slow_generation, slow_result), (fast_generation, fast_result)) = tokio::join!(
        use_case.evaluate_ticket(&slow_ticket, FailurePolicy::Strict),
        use_case.evaluate_ticket(&fast_ticket, FailurePolicy::Strict),
    );

    // the fast result lands first, then the slow one arrives late
    assert!(session.apply(fast_generation, fast_result.unwrap()));
    assert!(!session.apply(slow_generation, slow_result.unwrap()));

    let suggestions = session.suggestions().unwrap();
    assert_eq!(suggestions.len(), 4);
    assert_eq!(suggestions.ingredients().len(), 1);
}

#[tokio::test]
async fn test_session_refetches_after_every_change() {
    let catalog = pantry_catalog();
    let use_case = MatchIngredientsUseCase::new(catalog.clone(), MockProgressReporter::new());
    let mut session = IngredientSession::new();

    for name in ["chicken", "rice"] {
        let ticket = session.add(name).unwrap().unwrap();
        let (generation, result) = use_case
            .evaluate_ticket(&ticket, FailurePolicy::Strict)
            .await;
        assert!(session.apply(generation, result.unwrap()));
    }

    // one lookup for the first evaluation, two for the second
    assert_eq!(catalog.lookup_count(), 3);
    assert_eq!(session.suggestions().unwrap().len(), 2);

    // a duplicate changes nothing and issues no ticket
    assert!(session.add("rice").unwrap().is_none());

    let ticket = session.clear().unwrap();
    let (generation, result) = use_case
        .evaluate_ticket(&ticket, FailurePolicy::Strict)
        .await;
    assert!(session.apply(generation, result.unwrap()));
    assert!(session.suggestions().unwrap().is_empty());
    assert_eq!(catalog.lookup_count(), 3);
}

#[tokio::test]
async fn test_browse_bundled_catalog() {
    let browse = BrowseCatalogUseCase::new(BundledCatalog::bundled().unwrap())
        .with_default_category(BundledCatalog::default_category());

    let listing = browse.recipes_in_category(Some("Kerala")).await.unwrap();
    assert_eq!(listing.source, ListingSource::Category("Kerala".to_string()));
    assert_eq!(listing.recipes.len(), 2);

    let everything = browse.recipes_in_category(None).await.unwrap();
    assert_eq!(everything.recipes.len(), 12);

    let search = browse.search("kerala").await.unwrap();
    assert_eq!(search.source, ListingSource::Search("kerala".to_string()));
    assert_eq!(search.recipes.len(), 2);

    let blank = browse.search("  ").await.unwrap();
    assert_eq!(blank.recipes.len(), 12);
}

#[tokio::test(start_paused = true)]
async fn test_search_as_you_type_keeps_only_latest_query() {
    let browse = BrowseCatalogUseCase::new(BundledCatalog::bundled().unwrap())
        .with_default_category(BundledCatalog::default_category());
    let debouncer = SearchDebouncer::default();

    let (first, second) = tokio::join!(
        browse.search_as_you_type(&debouncer, "chick"),
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            browse.search_as_you_type(&debouncer, "kerala").await
        }
    );

    assert!(first.is_none());
    let listing = second.unwrap().unwrap();
    assert_eq!(listing.recipes.len(), 2);
}

#[tokio::test]
async fn test_register_and_login_through_gateway() {
    let gateway = MockAuthGateway::ok(json!("token-123"));
    let use_case = AuthenticateUseCase::new(gateway.clone());

    let registered = use_case
        .register("Cook", " cook@example.com ", "secret")
        .await
        .unwrap();
    assert_eq!(registered.action, AuthAction::Register);
    assert_eq!(registered.email, "cook@example.com");

    let logged_in = use_case.login("cook@example.com", "secret").await.unwrap();
    assert_eq!(logged_in.action, AuthAction::Login);
    assert_eq!(logged_in.data, Some(json!("token-123")));
    assert_eq!(gateway.call_count(), 2);
}

#[tokio::test]
async fn test_auth_failure_and_missing_fields() {
    let gateway = MockAuthGateway::error(json!("Email already registered"));
    let use_case = AuthenticateUseCase::new(gateway.clone());

    let error = use_case
        .register("Cook", "cook@example.com", "secret")
        .await
        .unwrap_err();
    assert!(error.to_string().contains("Email already registered"));

    let error = use_case.login("", "secret").await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<RecipeError>(),
        Some(RecipeError::Validation { .. })
    ));
    // validation failures never reach the backend
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn test_json_output_for_bundled_match() {
    let use_case = MatchIngredientsUseCase::new(
        BundledCatalog::bundled().unwrap(),
        MockProgressReporter::new(),
    );
    let request = MatchRequest::from_names(["chicken", "coconut"], FailurePolicy::Strict).unwrap();
    let response = use_case.execute(request).await.unwrap();

    let output = JsonFormatter::new().format_matches(&response).unwrap();
    let document: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(document["count"], 2);
    assert_eq!(document["partial"], false);
    assert_eq!(document["meals"][0]["idMeal"], "in-010");
    assert_eq!(document["meals"][1]["idMeal"], "in-012");
}
