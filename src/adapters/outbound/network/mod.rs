/// Network adapters for the recipe catalog and the account backend
mod auth_client;
mod bundled_catalog;
mod http_settings;
mod mealdb_client;

pub use auth_client::{HttpAuthGateway, DEFAULT_AUTH_BASE_URL};
pub use bundled_catalog::BundledCatalog;
pub use http_settings::{HttpSettings, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
pub use mealdb_client::{MealDbCatalog, DEFAULT_BASE_URL};
