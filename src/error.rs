use thiserror::Error;

/// Rejections raised while constructing a [`Place`](crate::model::Place).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Place name is required")]
    NameRequired,

    #[error("Invalid createdAt timestamp: {0}")]
    InvalidTimestamp(String),
}

#[derive(Error, Debug)]
pub enum PlacebookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Place not found: {0}")]
    NotFound(String),

    #[error("Duplicate place id: {0}")]
    DuplicateId(String),

    #[error("Failed to read stored places: {0}")]
    PersistenceRead(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config already exists at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, PlacebookError>;
