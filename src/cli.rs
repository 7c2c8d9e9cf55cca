use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Which recipe catalog backs the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CatalogKind {
    /// TheMealDB HTTP API
    #[default]
    Mealdb,
    /// Regional dataset shipped with the binary (works offline)
    Bundled,
}

impl std::str::FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mealdb" | "themealdb" => Ok(CatalogKind::Mealdb),
            "bundled" | "regional" => Ok(CatalogKind::Bundled),
            _ => Err(format!(
                "Invalid catalog: {}. Please specify 'mealdb' or 'bundled'",
                s
            )),
        }
    }
}

/// Find recipes that use every ingredient you have
#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(version)]
#[command(about = "Find recipes that use every ingredient you have", long_about = None)]
pub struct Args {
    /// Output format: json or markdown [default: markdown]
    #[arg(short, long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./recipe-finder.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Recipe catalog to query [default: mealdb]
    #[arg(long, global = true, value_enum)]
    pub catalog: Option<CatalogKind>,

    /// Replacement dataset file for the bundled catalog
    #[arg(long, global = true, value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Keep the lookups that succeeded when some ingredient lookups fail
    #[arg(long, global = true)]
    pub allow_partial: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List recipes that use every given ingredient
    Match {
        /// Ingredient to match; repeat for more: -i chicken -i rice
        #[arg(short, long = "ingredient", value_name = "INGREDIENT", required = true)]
        ingredients: Vec<String>,
    },
    /// Interactive ingredient list with live matches
    Pantry,
    /// List recipe categories
    Categories,
    /// List the recipes of a category
    Browse {
        /// Category name [default: Chicken, or All for the bundled catalog]
        #[arg(long)]
        category: Option<String>,
    },
    /// Search recipes by name
    Search {
        /// Text to search for; blank lists the default category
        text: String,
    },
    /// Show one recipe in full
    Show {
        /// Recipe id (idMeal)
        id: String,
    },
    /// Create an account on the auth backend
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in on the auth backend
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
