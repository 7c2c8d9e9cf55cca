//! Configuration file support for recipe-finder.
//!
//! Provides YAML-based configuration through `recipe-finder.config.yml`
//! files, plus the merge of command-line options, file values and defaults
//! into the effective [`Settings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::{
    HttpSettings, DEFAULT_AUTH_BASE_URL, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT,
};
use crate::application::dto::OutputFormat;
use crate::cli::{Args, CatalogKind};
use crate::recipe_matching::policies::FailurePolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "recipe-finder.config.yml";

const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=120;
const RETRIES_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub catalog: Option<String>,
    pub catalog_base_url: Option<String>,
    pub auth_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub allow_partial: Option<bool>,
    pub dataset_path: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "using discovered config file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads the file named by `--config`, or discovers one in `dir`.
pub fn load_for_args(args: &Args, dir: &Path) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e))?;
    }

    if let Some(catalog) = &config.catalog {
        catalog
            .parse::<CatalogKind>()
            .map_err(|e| anyhow::anyhow!("Invalid config: catalog: {}", e))?;
    }

    for (key, value) in [
        ("catalog_base_url", &config.catalog_base_url),
        ("auth_base_url", &config.auth_base_url),
    ] {
        if let Some(value) = value {
            validate_base_url(key, value)?;
        }
    }

    if let Some(timeout) = config.request_timeout_secs {
        if !TIMEOUT_RANGE.contains(&timeout) {
            bail!(
                "Invalid config: request_timeout_secs must be between {} and {} (got {}).\n\n\
                 💡 Hint: The default is {} seconds.",
                TIMEOUT_RANGE.start(),
                TIMEOUT_RANGE.end(),
                timeout,
                DEFAULT_TIMEOUT.as_secs()
            );
        }
    }

    if let Some(retries) = config.max_retries {
        if !RETRIES_RANGE.contains(&retries) {
            bail!(
                "Invalid config: max_retries must be between {} and {} (got {}).\n\n\
                 💡 Hint: The default is {} attempts.",
                RETRIES_RANGE.start(),
                RETRIES_RANGE.end(),
                retries,
                DEFAULT_MAX_RETRIES
            );
        }
    }

    Ok(())
}

fn validate_base_url(key: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).with_context(|| {
        format!(
            "Invalid config: {} is not a valid URL: {}\n\n💡 Hint: Use a full URL such as \"https://www.themealdb.com/api/json/v1/1\".",
            key, value
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!(
            "Invalid config: {} must use http or https (got '{}').",
            key,
            parsed.scheme()
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging CLI options, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub catalog: CatalogKind,
    pub catalog_http: HttpSettings,
    pub auth_http: HttpSettings,
    pub failure_policy: FailurePolicy,
    pub dataset_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Command-line options win over the config file, which wins over defaults.
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, &config.format) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let catalog = match (args.catalog, &config.catalog) {
            (Some(catalog), _) => catalog,
            (None, Some(catalog)) => catalog.parse().map_err(anyhow::Error::msg)?,
            (None, None) => CatalogKind::default(),
        };

        let timeout = config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        let max_retries = config.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);

        let http = |base_url: Option<String>, default: &str| {
            HttpSettings::new(base_url.unwrap_or_else(|| default.to_string()))
                .with_timeout(timeout)
                .with_max_retries(max_retries)
        };

        let allow_partial = args.allow_partial || config.allow_partial.unwrap_or(false);

        Ok(Self {
            format,
            catalog,
            catalog_http: http(config.catalog_base_url, DEFAULT_BASE_URL),
            auth_http: http(config.auth_base_url, DEFAULT_AUTH_BASE_URL),
            failure_policy: FailurePolicy::from_allow_partial(allow_partial),
            dataset_path: args.dataset.clone().or(config.dataset_path),
            output: args.output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
format: json
catalog: bundled
catalog_base_url: "http://localhost:8080/api/json/v1/1"
auth_base_url: "https://auth.example.com"
request_timeout_secs: 5
max_retries: 2
allow_partial: true
dataset_path: ./recipes.json
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.catalog.as_deref(), Some("bundled"));
        assert_eq!(config.request_timeout_secs, Some(5));
        assert_eq!(config.max_retries, Some(2));
        assert_eq!(config.allow_partial, Some(true));
        assert_eq!(config.dataset_path, Some(PathBuf::from("./recipes.json")));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: markdown\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");
        let err = load_config_from_path(&path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "\n");
        let config = load_config_from_path(&path).unwrap();
        assert!(config.format.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        for (content, expected) in [
            ("format: yaml", "Invalid format"),
            ("catalog: local", "Invalid catalog"),
            ("catalog_base_url: not a url", "not a valid URL"),
            ("auth_base_url: \"ftp://example.com\"", "http or https"),
            ("request_timeout_secs: 0", "request_timeout_secs must be between"),
            ("max_retries: 11", "max_retries must be between"),
        ] {
            let path = write_config(&dir, content);
            let err = load_config_from_path(&path).unwrap_err();
            assert!(
                format!("{:#}", err).contains(expected),
                "{} should fail with {}",
                content,
                expected
            );
        }
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: json\ncolour: blue\n");
        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("colour"));
    }

    #[test]
    fn test_resolve_defaults() {
        let args = Args::try_parse_from(["recipe-finder", "categories"]).unwrap();
        let settings = Settings::resolve(&args, None).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.catalog, CatalogKind::Mealdb);
        assert_eq!(settings.failure_policy, FailurePolicy::Strict);
        assert_eq!(settings.catalog_http.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.auth_http.base_url, DEFAULT_AUTH_BASE_URL);
        assert_eq!(settings.catalog_http.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            catalog: Some("bundled".to_string()),
            request_timeout_secs: Some(30),
            allow_partial: Some(true),
            dataset_path: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };
        let args = Args::try_parse_from([
            "recipe-finder",
            "-f",
            "markdown",
            "--dataset",
            "from-cli.json",
            "categories",
        ])
        .unwrap();

        let settings = Settings::resolve(&args, Some(config)).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.catalog, CatalogKind::Bundled);
        assert_eq!(settings.failure_policy, FailurePolicy::Partial);
        assert_eq!(settings.catalog_http.timeout, Duration::from_secs(30));
        assert_eq!(settings.dataset_path, Some(PathBuf::from("from-cli.json")));
    }
}
