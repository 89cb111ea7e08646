use crate::adapters::recognizer::DEFAULT_DETECTED_INGREDIENTS;
use crate::domain::model::{Difficulty, FilterCriteria};
use crate::domain::ports::{CatalogSourceKind, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

const CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Find recipes that use the ingredients you already have")]
pub struct CliConfig {
    /// Path to a TOML configuration file; replaces the catalog and scan flags
    #[arg(short, long)]
    pub config: Option<String>,

    /// Recipe catalog file (.json or .toml)
    #[arg(long, conflicts_with = "catalog_url")]
    pub catalog: Option<String>,

    /// URL serving the recipe catalog as JSON
    #[arg(long)]
    pub catalog_url: Option<String>,

    #[arg(long, default_value = "1500", help = "Simulated image analysis delay")]
    pub scan_delay_ms: u64,

    #[arg(long, default_value = "compact", value_parser = ["compact", "json"])]
    pub log_format: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every recipe in the catalog
    List,
    /// Find recipes sharing at least two ingredients with the list
    Search {
        /// Comma-separated ingredients; without them the current text is searched
        #[arg(num_args = 0.., trailing_var_arg = true)]
        ingredients: Vec<String>,
    },
    /// Filter the full catalog
    Filter(FilterArgs),
    /// Detect ingredients in a photo and search with them
    Scan { image: PathBuf },
    /// Show one recipe with ingredients, instructions and nutrition
    Show { id: String },
    /// Start an interactive session
    Interactive,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Maximum cooking time in minutes
    #[arg(long)]
    pub max_time: Option<u32>,

    /// Required dietary tags, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub dietary: Vec<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            difficulty: args.difficulty,
            max_cooking_time: args.max_time,
            dietary: args
                .dietary
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn catalog_source(&self) -> CatalogSourceKind {
        if let Some(endpoint) = &self.catalog_url {
            CatalogSourceKind::Http {
                endpoint: endpoint.clone(),
                timeout: CATALOG_TIMEOUT,
            }
        } else if let Some(path) = &self.catalog {
            CatalogSourceKind::File(PathBuf::from(path))
        } else {
            CatalogSourceKind::Sample
        }
    }

    fn recognizer_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    fn placeholder_ingredients(&self) -> &str {
        DEFAULT_DETECTED_INGREDIENTS
    }

    fn log_format(&self) -> &str {
        &self.log_format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        if let Some(endpoint) = &self.catalog_url {
            validate_url("catalog_url", endpoint)?;
        }
        validate_range("scan_delay_ms", self.scan_delay_ms, 0, 60_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_collects_words_after_subcommand() {
        let config =
            CliConfig::try_parse_from(["recipe-finder", "search", "tomatoes,", "cucumber"]).unwrap();

        match &config.command {
            Command::Search { ingredients } => {
                assert_eq!(ingredients.join(" "), "tomatoes, cucumber")
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(config.catalog_source(), CatalogSourceKind::Sample);
    }

    #[test]
    fn test_bare_search_parses_without_ingredients() {
        let config = CliConfig::try_parse_from(["recipe-finder", "search"]).unwrap();

        let Command::Search { ingredients } = config.command else {
            panic!("expected search command");
        };
        assert!(ingredients.is_empty());
    }

    #[test]
    fn test_filter_args_become_criteria() {
        let config = CliConfig::try_parse_from([
            "recipe-finder",
            "filter",
            "--difficulty",
            "easy",
            "--max-time",
            "30",
            "--dietary",
            "vegan, gluten-free",
        ])
        .unwrap();

        let Command::Filter(args) = config.command else {
            panic!("expected filter command");
        };
        let criteria = FilterCriteria::from(args);

        assert_eq!(criteria.difficulty, Some(Difficulty::Easy));
        assert_eq!(criteria.max_cooking_time, Some(30));
        assert_eq!(criteria.dietary, vec!["vegan", "gluten-free"]);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let result =
            CliConfig::try_parse_from(["recipe-finder", "filter", "--difficulty", "extreme"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_flags_select_source() {
        let config =
            CliConfig::try_parse_from(["recipe-finder", "--catalog", "book.json", "list"]).unwrap();
        assert_eq!(
            config.catalog_source(),
            CatalogSourceKind::File(PathBuf::from("book.json"))
        );

        let config = CliConfig::try_parse_from([
            "recipe-finder",
            "--catalog-url",
            "not a url",
            "list",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }
}
