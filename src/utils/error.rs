use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("No ingredients provided")]
    EmptyIngredients,

    #[error("Operation already in progress: {operation}")]
    OperationInProgress { operation: String },

    #[error("Ingredient recognition failed: {message}")]
    RecognitionError { message: String },

    #[error("Recipe not found: {id}")]
    RecipeNotFound { id: String },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Unsupported image '{file_name}': {reason}")]
    UnsupportedImage { file_name: String, reason: String },

    #[error("Catalog request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Session,
    Recognition,
    Catalog,
    Network,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecipeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecipeError::EmptyIngredients
            | RecipeError::RecipeNotFound { .. }
            | RecipeError::UnsupportedImage { .. } => ErrorCategory::Input,
            RecipeError::OperationInProgress { .. } => ErrorCategory::Session,
            RecipeError::RecognitionError { .. } => ErrorCategory::Recognition,
            RecipeError::InvalidCatalog { .. }
            | RecipeError::SerializationError(_)
            | RecipeError::TomlError(_) => ErrorCategory::Catalog,
            RecipeError::HttpError(_) => ErrorCategory::Network,
            RecipeError::IoError(_) => ErrorCategory::System,
            RecipeError::MissingConfigError { .. }
            | RecipeError::InvalidConfigValueError { .. }
            | RecipeError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Inside a session nothing is fatal; severity only drives the CLI exit code.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Session => ErrorSeverity::Low,
            ErrorCategory::Recognition | ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Catalog | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecipeError::EmptyIngredients => "Please enter some ingredients first!".to_string(),
            RecipeError::OperationInProgress { .. } => {
                "Still processing the previous image, please wait.".to_string()
            }
            RecipeError::RecognitionError { .. } => {
                "Error processing image. Please try again.".to_string()
            }
            RecipeError::RecipeNotFound { id } => format!("No recipe with id '{}'", id),
            RecipeError::UnsupportedImage { file_name, .. } => {
                format!("'{}' does not look like an image", file_name)
            }
            RecipeError::InvalidCatalog { message } => {
                format!("The recipe catalog is invalid: {}", message)
            }
            RecipeError::HttpError(_) => "Could not download the recipe catalog".to_string(),
            RecipeError::IoError(e) => format!("File system error: {}", e),
            RecipeError::SerializationError(_) | RecipeError::TomlError(_) => {
                "The recipe catalog could not be parsed".to_string()
            }
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the ingredients, recipe id or image file and retry",
            ErrorCategory::Session => "Wait for the running image analysis to finish",
            ErrorCategory::Recognition => "Upload the image again",
            ErrorCategory::Catalog => "Fix the catalog file so every recipe is well formed",
            ErrorCategory::Network => "Check the catalog endpoint and your network connection",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Review the configuration file and CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ingredients_is_low_severity_input() {
        let err = RecipeError::EmptyIngredients;
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Please enter some ingredients first!");
    }

    #[test]
    fn test_recognition_error_prompts_retry() {
        let err = RecipeError::RecognitionError {
            message: "model offline".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("try again"));
    }

    #[test]
    fn test_invalid_catalog_is_high_severity() {
        let err = RecipeError::InvalidCatalog {
            message: "duplicate id '1'".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("duplicate id"));
    }
}
