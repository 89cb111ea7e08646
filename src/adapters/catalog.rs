use crate::core::catalog::Catalog;
use crate::domain::model::Recipe;
use crate::domain::ports::{CatalogSource, CatalogSourceKind};
use crate::utils::error::{RecipeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct SampleCatalog;

#[async_trait]
impl CatalogSource for SampleCatalog {
    async fn load(&self) -> Result<Vec<Recipe>> {
        Ok(Catalog::sample().recipes().to_vec())
    }

    fn describe(&self) -> String {
        "built-in sample recipes".to_string()
    }
}

/// TOML catalogs list recipes under `[[recipes]]`.
#[derive(Deserialize)]
struct TomlRecipes {
    recipes: Vec<Recipe>,
}

/// Reads a `.json` array of recipes or a `.toml` file with `[[recipes]]` tables.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Vec<Recipe>> {
        tracing::debug!("Reading catalog file {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;

        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("toml") => Ok(toml::from_str::<TomlRecipes>(&content)?.recipes),
            _ => Err(RecipeError::InvalidConfigValueError {
                field: "catalog.path".to_string(),
                value: self.path.display().to_string(),
                reason: "Catalog file must end in .json or .toml".to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches a JSON array of recipes over HTTP.
pub struct HttpCatalog {
    endpoint: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Vec<Recipe>> {
        tracing::debug!("Making catalog request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());
        let recipes = response.error_for_status()?.json::<Vec<Recipe>>().await?;
        Ok(recipes)
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.endpoint)
    }
}

pub fn build_catalog_source(kind: CatalogSourceKind) -> Result<Box<dyn CatalogSource>> {
    Ok(match kind {
        CatalogSourceKind::Sample => Box::new(SampleCatalog),
        CatalogSourceKind::File(path) => Box::new(FileCatalog::new(path)),
        CatalogSourceKind::Http { endpoint, timeout } => {
            Box::new(HttpCatalog::new(endpoint, timeout)?)
        }
    })
}

/// Loads records from `source` and validates them into a [`Catalog`].
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog> {
    tracing::info!("📚 Loading recipes from {}", source.describe());
    let recipes = source.load().await?;
    let catalog = Catalog::from_recipes(recipes)?;
    tracing::info!("📚 Loaded {} recipes", catalog.len());
    Ok(catalog)
}
