/// Use cases module containing application business logic orchestration
mod authenticate;
mod browse_catalog;
mod match_ingredients;

pub use authenticate::AuthenticateUseCase;
pub use browse_catalog::{BrowseCatalogUseCase, DEFAULT_CATEGORY};
pub use match_ingredients::MatchIngredientsUseCase;
