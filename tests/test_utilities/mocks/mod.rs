/// Mock implementations for testing
mod mock_auth_gateway;
mod mock_progress_reporter;
mod mock_recipe_catalog;

pub use mock_auth_gateway::MockAuthGateway;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_recipe_catalog::MockRecipeCatalog;
