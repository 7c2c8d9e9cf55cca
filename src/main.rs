use owo_colors::OwoColorize;
use recipe_finder::adapters::inbound::PantryShell;
use recipe_finder::adapters::outbound::console::StderrProgressReporter;
use recipe_finder::adapters::outbound::filesystem::FileSystemReader;
use recipe_finder::adapters::outbound::network::{BundledCatalog, HttpAuthGateway, MealDbCatalog};
use recipe_finder::application::dto::MatchRequest;
use recipe_finder::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use recipe_finder::application::use_cases::{
    AuthenticateUseCase, BrowseCatalogUseCase, MatchIngredientsUseCase, DEFAULT_CATEGORY,
};
use recipe_finder::cli::{Args, CatalogKind, Command};
use recipe_finder::config::{self, Settings};
use recipe_finder::ports::outbound::{
    OutputPresenter, RecipeCatalog, RecipeDatasetReader, RecipeFormatter,
};
use recipe_finder::recipe_matching::domain::RegionalDataset;
use recipe_finder::shared::error::{ExitCode, RecipeError};
use recipe_finder::shared::Result;
use std::process;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() {
    init_logging();

    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter),
        )
        .try_init();
}

/// Bad user input maps to InvalidArguments, everything else to ApplicationError
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<RecipeError>() {
        Some(RecipeError::InvalidIngredient { .. }) | Some(RecipeError::Validation { .. }) => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_for_args(&args, &cwd)?;
    let settings = Settings::resolve(&args, config)?;
    tracing::debug!(?settings, "resolved settings");

    let formatter = FormatterFactory::create(settings.format);
    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));

    if matches!(args.command, Command::Register { .. } | Command::Login { .. }) {
        return run_account_command(args.command, &settings, formatter, presenter).await;
    }

    match settings.catalog {
        CatalogKind::Mealdb => {
            if settings.dataset_path.is_some() {
                eprintln!("⚠️  Warning: --dataset only applies to the bundled catalog and will be ignored.");
            }
            let catalog = MealDbCatalog::with_settings(settings.catalog_http.clone())?;
            run_catalog_command(args.command, catalog, DEFAULT_CATEGORY, &settings, formatter, presenter)
                .await
        }
        CatalogKind::Bundled => {
            let dataset = match &settings.dataset_path {
                Some(path) => FileSystemReader::new().read_dataset(path)?,
                None => RegionalDataset::bundled()?,
            };
            let catalog = BundledCatalog::new(dataset);
            run_catalog_command(
                args.command,
                catalog,
                BundledCatalog::default_category(),
                &settings,
                formatter,
                presenter,
            )
            .await
        }
    }
}

async fn run_catalog_command<C: RecipeCatalog>(
    command: Command,
    catalog: C,
    default_category: &str,
    settings: &Settings,
    formatter: Box<dyn RecipeFormatter>,
    presenter: Box<dyn OutputPresenter>,
) -> Result<ExitCode> {
    match command {
        Command::Match { ingredients } => {
            let request = MatchRequest::from_names(&ingredients, settings.failure_policy)?;
            let use_case = MatchIngredientsUseCase::new(catalog, StderrProgressReporter::new());
            let response = use_case.execute(request).await?;

            eprintln!("{}", FormatterFactory::progress_message(settings.format));
            presenter.present(&formatter.format_matches(&response)?)?;
            Ok(found(!response.result.is_empty()))
        }
        Command::Pantry => {
            let use_case = MatchIngredientsUseCase::new(catalog, StderrProgressReporter::new());
            let mut shell = PantryShell::new(&use_case, formatter, settings.failure_policy);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            shell.run(stdin, &mut stdout).await?;
            Ok(ExitCode::Success)
        }
        Command::Categories => {
            let browse = BrowseCatalogUseCase::new(catalog);
            let categories = browse.categories().await?;
            presenter.present(&formatter.format_categories(&categories)?)?;
            Ok(found(!categories.is_empty()))
        }
        Command::Browse { category } => {
            let browse = BrowseCatalogUseCase::new(catalog).with_default_category(default_category);
            let listing = browse.recipes_in_category(category.as_deref()).await?;
            presenter.present(&formatter.format_listing(&listing)?)?;
            Ok(found(!listing.is_empty()))
        }
        Command::Search { text } => {
            let browse = BrowseCatalogUseCase::new(catalog).with_default_category(default_category);
            let listing = browse.search(&text).await?;
            presenter.present(&formatter.format_listing(&listing)?)?;
            Ok(found(!listing.is_empty()))
        }
        Command::Show { id } => {
            let browse = BrowseCatalogUseCase::new(catalog);
            match browse.recipe_detail(&id).await? {
                Some(detail) => {
                    presenter.present(&formatter.format_detail(&detail)?)?;
                    Ok(ExitCode::Success)
                }
                None => {
                    eprintln!("No recipe found with id '{}'", id.trim());
                    Ok(ExitCode::NoMatches)
                }
            }
        }
        Command::Register { .. } | Command::Login { .. } => {
            run_account_command(command, settings, formatter, presenter).await
        }
    }
}

async fn run_account_command(
    command: Command,
    settings: &Settings,
    formatter: Box<dyn RecipeFormatter>,
    presenter: Box<dyn OutputPresenter>,
) -> Result<ExitCode> {
    let use_case = AuthenticateUseCase::new(HttpAuthGateway::new(settings.auth_http.clone())?);

    let outcome = match command {
        Command::Register {
            name,
            email,
            password,
        } => use_case.register(&name, &email, &password).await?,
        Command::Login { email, password } => use_case.login(&email, &password).await?,
        other => anyhow::bail!("{:?} is not an account command", other),
    };

    presenter.present(&formatter.format_auth(&outcome)?)?;
    Ok(ExitCode::Success)
}

fn found(any: bool) -> ExitCode {
    if any {
        ExitCode::Success
    } else {
        ExitCode::NoMatches
    }
}
