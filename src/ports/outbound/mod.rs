/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console, etc.).
pub mod auth_gateway;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod recipe_catalog;
pub mod recipe_dataset_reader;

pub use auth_gateway::{AuthGateway, AuthReply, Credentials, Registration};
pub use formatter::RecipeFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use recipe_catalog::RecipeCatalog;
pub use recipe_dataset_reader::RecipeDatasetReader;
