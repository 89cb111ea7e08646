use crate::domain::model::{ImageInput, Notification, Recipe};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Where recipe records come from before they are validated into a catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Recipe>>;

    fn describe(&self) -> String;
}

/// Turns an image into ingredient names.
#[async_trait]
pub trait IngredientRecognizer: Send + Sync {
    async fn recognize(&self, image: &ImageInput) -> Result<Vec<String>>;
}

/// Fire-and-forget status messages for the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSourceKind {
    Sample,
    File(PathBuf),
    Http { endpoint: String, timeout: Duration },
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_source(&self) -> CatalogSourceKind;
    fn recognizer_delay(&self) -> Duration;
    fn placeholder_ingredients(&self) -> &str;
    fn log_format(&self) -> &str;
}
