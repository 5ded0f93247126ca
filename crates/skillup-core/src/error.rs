use thiserror::Error;

/// Top-level error type for SkillUp.
///
/// Classification itself never fails; these errors come from loading
/// configuration and catalog data at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SkillUpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SkillUpError {
    fn from(err: toml::de::Error) -> Self {
        SkillUpError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SkillUpError {
    fn from(err: toml::ser::Error) -> Self {
        SkillUpError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SkillUpError {
    fn from(err: serde_json::Error) -> Self {
        SkillUpError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for SkillUp operations.
pub type Result<T> = std::result::Result<T, SkillUpError>;
