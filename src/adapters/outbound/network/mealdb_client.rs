use super::http_settings::{retry_delay, HttpSettings};
use crate::ports::outbound::RecipeCatalog;
use crate::recipe_matching::domain::{
    Category, IngredientLine, IngredientQuery, RecipeDetail, RecipeSummary,
};
use crate::shared::error::RecipeError;
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Public TheMealDB v1 API with the free test key
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Number of `strIngredientN` / `strMeasureN` slots in a meal record
const INGREDIENT_SLOTS: usize = 20;

/// `{"meals": [...]}`; TheMealDB sends `null` instead of an empty array
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct MealsEnvelope<T> {
    #[serde(default)]
    meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Option<Vec<Category>>,
}

/// MealDbCatalog adapter for the TheMealDB HTTP API
///
/// Implements the RecipeCatalog port. Every request carries the configured
/// timeout and is retried with linear back-off before giving up.
pub struct MealDbCatalog {
    client: reqwest::Client,
    settings: HttpSettings,
}

impl MealDbCatalog {
    /// Creates a catalog client for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(HttpSettings::new(DEFAULT_BASE_URL))
    }

    pub fn with_settings(settings: HttpSettings) -> Result<Self> {
        let client = settings.build_client()?;
        Ok(Self { client, settings })
    }

    /// GETs `{base}/{endpoint}` with an optional single query parameter, retrying on failure
    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<(&str, &str)>,
    ) -> Result<T> {
        let url = self.build_url(endpoint, query)?;
        let mut last_error = None;

        for attempt in 1..=self.settings.max_retries {
            match self.get_json(&url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    tracing::debug!(%url, attempt, error = %e, "catalog request failed");
                    last_error = Some(e);
                    if attempt < self.settings.max_retries {
                        tokio::time::sleep(retry_delay(attempt)).await;
                    }
                }
            }
        }

        let details = last_error
            .map(|e| format!("{:#}", e))
            .unwrap_or_else(|| "no attempt was made".to_string());
        Err(RecipeError::CatalogRequest {
            endpoint: endpoint.to_string(),
            details,
        }
        .into())
    }

    fn build_url(&self, endpoint: &str, query: Option<(&str, &str)>) -> Result<String> {
        let base = self.settings.trimmed_base_url();
        match query {
            None => Ok(format!("{}/{}", base, endpoint)),
            Some((key, value)) => {
                validate_url_component(value, key)?;
                Ok(format!(
                    "{}/{}?{}={}",
                    base,
                    endpoint,
                    key,
                    urlencoding::encode(value)
                ))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("TheMealDB API returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }

    async fn list_meals(&self, endpoint: &str, key: &str, value: &str) -> Result<Vec<RecipeSummary>> {
        let envelope: MealsEnvelope<RecipeSummary> =
            self.get_with_retry(endpoint, Some((key, value))).await?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

/// Maps a full `lookup.php` meal record into a RecipeDetail
///
/// Returns `None` when the record has no id or name.
fn detail_from_record(record: &Map<String, Value>) -> Option<RecipeDetail> {
    let text = |key: &str| {
        record
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let ingredients = (1..=INGREDIENT_SLOTS)
        .filter_map(|n| {
            let name = text(&format!("strIngredient{}", n))?;
            Some(IngredientLine::new(name, text(&format!("strMeasure{}", n))))
        })
        .collect();

    Some(RecipeDetail {
        id: text("idMeal")?,
        name: text("strMeal")?,
        category: text("strCategory"),
        area: text("strArea"),
        thumbnail: text("strMealThumb"),
        ingredients,
        instructions: text("strInstructions")
            .map(|t| RecipeDetail::split_instructions(&t))
            .unwrap_or_default(),
        tags: text("strTags")
            .map(|t| RecipeDetail::split_tags(&t))
            .unwrap_or_default(),
        youtube_url: text("strYoutube"),
        source_url: text("strSource"),
    })
}

#[async_trait]
impl RecipeCatalog for MealDbCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let envelope: CategoriesEnvelope = self.get_with_retry("categories.php", None).await?;
        Ok(envelope.categories.unwrap_or_default())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>> {
        self.list_meals("filter.php", "c", category).await
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &IngredientQuery,
    ) -> Result<Vec<RecipeSummary>> {
        self.list_meals("filter.php", "i", ingredient.as_str()).await
    }

    async fn search_by_name(&self, text: &str) -> Result<Vec<RecipeSummary>> {
        self.list_meals("search.php", "s", text).await
    }

    async fn lookup_recipe(&self, id: &str) -> Result<Option<RecipeDetail>> {
        let envelope: MealsEnvelope<Map<String, Value>> =
            self.get_with_retry("lookup.php", Some(("i", id))).await?;
        Ok(envelope
            .meals
            .unwrap_or_default()
            .first()
            .and_then(detail_from_record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn catalog_for(server: &MockServer, max_retries: u32) -> MealDbCatalog {
        let settings = HttpSettings::new(server.uri())
            .with_timeout(Duration::from_secs(2))
            .with_max_retries(max_retries);
        MealDbCatalog::with_settings(settings).unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(MealDbCatalog::new().is_ok());
    }

    #[tokio::test]
    async fn test_filter_by_ingredient_keeps_passthrough_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .and(query_param("i", "chicken breast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meals": [
                    {"idMeal": "52940", "strMeal": "Brown Stew Chicken",
                     "strMealThumb": "https://example.com/a.jpg", "strTags": "Stew"},
                    {"idMeal": "52846", "strMeal": "Chicken & mushroom Hotpot"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let catalog = catalog_for(&server, 1);
        let ingredient = IngredientQuery::new("chicken breast").unwrap();
        let recipes = catalog.filter_by_ingredient(&ingredient).await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id(), "52940");
        assert_eq!(recipes[0].extra()["strTags"], "Stew");
        assert!(recipes[1].thumbnail().is_none());
    }

    #[tokio::test]
    async fn test_null_meals_is_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meals": null})))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server, 1);
        let ingredient = IngredientQuery::new("unobtainium").unwrap();
        assert!(catalog.filter_by_ingredient(&ingredient).await.unwrap().is_empty());
        assert!(catalog.filter_by_category("Nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_retried_then_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let catalog = catalog_for(&server, 2);
        let error = catalog.search_by_name("curry").await.unwrap_err();
        match error.downcast_ref::<RecipeError>() {
            Some(RecipeError::CatalogRequest { endpoint, details }) => {
                assert_eq!(endpoint, "search.php");
                assert!(details.contains("503"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unsafe_component_is_rejected_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let catalog = catalog_for(&server, 1);
        assert!(catalog.lookup_recipe("../admin").await.is_err());
    }

    #[tokio::test]
    async fn test_list_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "categories": [{
                    "idCategory": "1",
                    "strCategory": "Beef",
                    "strCategoryThumb": "https://example.com/beef.png",
                    "strCategoryDescription": "Beef is the culinary name for meat from cattle."
                }]
            })))
            .mount(&server)
            .await;

        let categories = catalog_for(&server, 1).list_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Beef");
        assert_eq!(categories[0].id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_lookup_recipe_maps_full_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lookup.php"))
            .and(query_param("i", "52772"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meals": [{
                    "idMeal": "52772",
                    "strMeal": "Teriyaki Chicken Casserole",
                    "strCategory": "Chicken",
                    "strArea": "Japanese",
                    "strInstructions": "Preheat oven.\r\n\r\nCombine soy sauce.",
                    "strMealThumb": "https://example.com/t.jpg",
                    "strTags": "Meat,Casserole",
                    "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
                    "strIngredient1": "soy sauce",
                    "strMeasure1": "3/4 cup",
                    "strIngredient2": "water",
                    "strMeasure2": " ",
                    "strIngredient3": "",
                    "strMeasure3": "",
                    "strIngredient4": null,
                    "strSource": null
                }]
            })))
            .mount(&server)
            .await;

        let detail = catalog_for(&server, 1)
            .lookup_recipe("52772")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(detail.name, "Teriyaki Chicken Casserole");
        assert_eq!(detail.area.as_deref(), Some("Japanese"));
        assert_eq!(detail.ingredients.len(), 2);
        assert_eq!(detail.ingredients[0].measure.as_deref(), Some("3/4 cup"));
        assert!(detail.ingredients[1].measure.is_none());
        assert_eq!(detail.instructions, vec!["Preheat oven.", "Combine soy sauce."]);
        assert_eq!(detail.tags, vec!["Meat", "Casserole"]);
        assert_eq!(detail.youtube_video_id().as_deref(), Some("4aZr5hZXP_s"));
        assert!(detail.source_url.is_none());
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lookup.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meals": null})))
            .mount(&server)
            .await;

        assert!(catalog_for(&server, 1)
            .lookup_recipe("0")
            .await
            .unwrap()
            .is_none());
    }
}
