use crate::core::matcher::parse_ingredient_list;
use crate::domain::model::ImageInput;
use crate::domain::ports::IngredientRecognizer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_DETECTED_INGREDIENTS: &str = "tomatoes, cucumber, lettuce";

/// Stand-in for a vision model: waits a fixed delay and reports a fixed
/// ingredient list without looking at the image.
#[derive(Debug, Clone)]
pub struct SimulatedRecognizer {
    delay: Duration,
    detected: String,
}

impl SimulatedRecognizer {
    pub fn new(delay: Duration, detected: impl Into<String>) -> Self {
        Self {
            delay,
            detected: detected.into(),
        }
    }
}

impl Default for SimulatedRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_DELAY, DEFAULT_DETECTED_INGREDIENTS)
    }
}

#[async_trait]
impl IngredientRecognizer for SimulatedRecognizer {
    async fn recognize(&self, image: &ImageInput) -> Result<Vec<String>> {
        tracing::debug!(
            "Simulating recognition of {} for {:?}",
            image.file_name,
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(parse_ingredient_list(&self.detected)
            .into_iter()
            .filter(|name| !name.is_empty())
            .collect())
    }
}
