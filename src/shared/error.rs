use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell "nothing matched" apart from a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - at least one recipe was found, or the command has no result set
    Success = 0,
    /// The command ran but no recipe matched the query
    NoMatches = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, file I/O error, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoMatches => write!(f, "No Matches (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for recipe lookups, sessions and authentication.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// A per-ingredient catalog lookup could not complete
    #[error("Failed to look up recipes for ingredient '{ingredient}'\nDetails: {details}\n\n💡 Hint: Check your internet connection, or re-run with --allow-partial to keep the lookups that succeeded")]
    CatalogLookup { ingredient: String, details: String },

    #[error("Catalog request failed: {endpoint}\nDetails: {details}\n\n💡 Hint: Check your internet connection and the configured catalog_base_url")]
    CatalogRequest { endpoint: String, details: String },

    #[error("Invalid ingredient: {reason}\n\n💡 Hint: Enter an ingredient name such as \"chicken\" or \"rice\"")]
    InvalidIngredient { reason: String },

    /// Validation error for user input and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Authentication failed: {message}\n\n💡 Hint: Check your email and password, or register first")]
    Authentication { message: String },

    #[error("Failed to parse recipe dataset: {path}\nDetails: {details}\n\n💡 Hint: The dataset must be a JSON document with \"cuisines\" and \"recipes\" arrays")]
    DatasetParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
