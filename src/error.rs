//! Custom error types for the survey dashboard
//!
//! Survey figures are compile-time literals, so nothing here concerns the data
//! itself. These errors cover the edges: the config file, terminal setup, and
//! user-supplied route or question names on the command line.

use thiserror::Error;

/// Main error type for the survey application
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A route or question name that does not exist
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration file: {0}")]
    SaveFailed(String),

    #[error("Failed to create config directory: {0}")]
    DirectoryCreationFailed(String),
}

/// Unknown names passed on the command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown page: {0}. Expected one of /, /about-you, /values-views, /your-support, /satisfaction")]
    UnknownRoute(String),

    #[error("Unknown question: {0}. Run `survey list` to see available questions")]
    UnknownQuestion(String),
}

/// Result type alias for the survey application
pub type Result<T> = std::result::Result<T, SurveyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurveyError::Config(ConfigError::NoConfigDir);
        assert!(err.to_string().contains("config directory"));

        let err = SurveyError::Lookup(LookupError::UnknownQuestion("Q99".to_string()));
        assert!(err.to_string().contains("Unknown question: Q99"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let survey_err: SurveyError = io_err.into();
        assert!(matches!(survey_err, SurveyError::Io(_)));

        let lookup: SurveyError = LookupError::UnknownRoute("/nope".to_string()).into();
        assert!(matches!(lookup, SurveyError::Lookup(LookupError::UnknownRoute(_))));
    }

    #[test]
    fn test_route_error_lists_routes() {
        let err = LookupError::UnknownRoute("/home".to_string());
        assert!(err.to_string().contains("/about-you"));
        assert!(err.to_string().contains("/satisfaction"));
    }
}
