//! recipe-finder - find recipes that use every ingredient you have
//!
//! Queries TheMealDB (or a bundled regional dataset) once per ingredient,
//! all lookups in flight together, and keeps only the recipes every lookup
//! returned. Browsing, name search, recipe details and a small account
//! client sit on the same catalog ports.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`recipe_matching`): Ingredient model, intersection and failure policy
//! - **Application Layer** (`application`): Use cases, session state and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP, filesystem, console and formatter implementations
//! - **Shared** (`shared`): Error types and security checks
//!
//! # Example
//!
//! ```no_run
//! use recipe_finder::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let use_case = MatchIngredientsUseCase::new(MealDbCatalog::new()?, StderrProgressReporter::new());
//!
//! let request = MatchRequest::from_names(["chicken", "rice"], FailurePolicy::Strict)?;
//! let response = use_case.execute(request).await?;
//!
//! let output = MarkdownFormatter::new().format_matches(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod recipe_matching;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        BundledCatalog, HttpAuthGateway, HttpSettings, MealDbCatalog,
    };
    pub use crate::application::dto::{MatchRequest, MatchResponse, OutputFormat, RecipeListing};
    pub use crate::application::session::{IngredientSession, SearchDebouncer};
    pub use crate::application::use_cases::{
        AuthenticateUseCase, BrowseCatalogUseCase, MatchIngredientsUseCase,
    };
    pub use crate::ports::outbound::{
        AuthGateway, OutputPresenter, ProgressReporter, RecipeCatalog, RecipeDatasetReader,
        RecipeFormatter,
    };
    pub use crate::recipe_matching::domain::{
        Category, IngredientList, IngredientQuery, MatchResult, RecipeDetail, RecipeSummary,
        RegionalDataset,
    };
    pub use crate::recipe_matching::policies::FailurePolicy;
    pub use crate::shared::Result;
}
