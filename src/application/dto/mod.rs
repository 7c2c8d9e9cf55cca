/// Data Transfer Objects for application layer
///
/// DTOs carry data between use cases and adapters, keeping the domain
/// layer isolated from presentation.
mod auth_outcome;
mod match_request;
mod match_response;
mod output_format;
mod recipe_listing;

pub use auth_outcome::{AuthAction, AuthOutcome};
pub use match_request::MatchRequest;
pub use match_response::MatchResponse;
pub use output_format::OutputFormat;
pub use recipe_listing::{ListingSource, RecipeListing};
