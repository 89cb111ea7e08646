use crate::adapters::recognizer::{DEFAULT_DETECTED_INGREDIENTS, DEFAULT_SCAN_DELAY};
use crate::domain::ports::{CatalogSourceKind, ConfigProvider};
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_required_field,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recognizer: RecognizerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    pub description: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// "sample", "file" or "http"
    #[serde(default = "default_source")]
    pub source: String,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            path: None,
            endpoint: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizerConfig {
    pub delay_ms: Option<u64>,
    pub detected_ingredients: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
    pub verbose: Option<bool>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            verbose: None,
        }
    }
}

fn default_app_name() -> String {
    "recipe-finder".to_string()
}

fn default_source() -> String {
    "sample".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecipeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RecipeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("app.name", &self.app.name)?;

        match self.catalog.source.as_str() {
            "sample" => {}
            "file" => {
                let path = validate_required_field("catalog.path", &self.catalog.path)?;
                validate_path("catalog.path", path)?;
            }
            "http" => {
                let endpoint =
                    validate_required_field("catalog.endpoint", &self.catalog.endpoint)?;
                validate_url("catalog.endpoint", endpoint)?;
                if let Some(timeout) = self.catalog.timeout_seconds {
                    validate_positive_number("catalog.timeout_seconds", timeout, 1)?;
                }
            }
            other => {
                return Err(RecipeError::InvalidConfigValueError {
                    field: "catalog.source".to_string(),
                    value: other.to_string(),
                    reason: "Unsupported source. Valid sources: sample, file, http".to_string(),
                })
            }
        }

        if let Some(detected) = &self.recognizer.detected_ingredients {
            validate_non_empty_string("recognizer.detected_ingredients", detected)?;
        }

        let valid_formats = ["compact", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(RecipeError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: self.logging.format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_source(&self) -> CatalogSourceKind {
        match self.catalog.source.as_str() {
            "file" => CatalogSourceKind::File(PathBuf::from(
                self.catalog.path.clone().unwrap_or_default(),
            )),
            "http" => CatalogSourceKind::Http {
                endpoint: self.catalog.endpoint.clone().unwrap_or_default(),
                timeout: Duration::from_secs(self.catalog.timeout_seconds.unwrap_or(10)),
            },
            _ => CatalogSourceKind::Sample,
        }
    }

    fn recognizer_delay(&self) -> Duration {
        self.recognizer
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SCAN_DELAY)
    }

    fn placeholder_ingredients(&self) -> &str {
        self.recognizer
            .detected_ingredients
            .as_deref()
            .unwrap_or(DEFAULT_DETECTED_INGREDIENTS)
    }

    fn log_format(&self) -> &str {
        &self.logging.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
