pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{ConsoleNotifier, SimulatedRecognizer, TracingNotifier};
pub use crate::core::catalog::Catalog;
pub use crate::core::session::{RecipeFinder, SearchOutcome, SessionState};
pub use crate::domain::model::{Difficulty, FavoriteIds, FilterCriteria, ImageInput, Recipe};
pub use crate::utils::error::{RecipeError, Result};
