pub mod catalog;
pub mod favorites;
pub mod filter;
pub mod matcher;
pub mod session;

pub use crate::domain::model::{FavoriteIds, FilterCriteria, Recipe};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, IngredientRecognizer, Notifier};
pub use crate::utils::error::Result;
