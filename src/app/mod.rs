// Presentation layer: terminal rendering and the interactive session.

pub mod render;
#[cfg(feature = "cli")]
pub mod repl;

use crate::domain::model::ImageInput;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{validate_file_extension, IMAGE_EXTENSIONS};
use std::path::Path;

/// Loads a photo from disk for the recognizer. Only the extension is checked.
pub async fn read_image(path: &Path) -> Result<ImageInput> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    validate_file_extension("image", &file_name, IMAGE_EXTENSIONS).map_err(|e| {
        RecipeError::UnsupportedImage {
            file_name: file_name.clone(),
            reason: e.to_string(),
        }
    })?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(ImageInput::new(file_name, bytes))
}
