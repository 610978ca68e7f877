use thiserror::Error;

/// Main error type for the textstyle-extractor crate
#[derive(Debug, Error)]
pub enum TextStyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No stylesheets found matching the provided patterns")]
    NoFilesFound,

    #[error("Could not find the shared library collection '{id}'")]
    RegistryLookupFailed { id: String },

    #[error("Registry error: {0}")]
    RegistryError(String),

    #[error("Failed to write output to {path}: {message}")]
    OutputError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input error: {0}")]
    InputError(String),
}

pub type Result<T> = std::result::Result<T, TextStyleError>;
