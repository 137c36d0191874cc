use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("A snippet named '{0}' already exists")]
    AlreadyExists(String),

    #[error("Snippet not found: {0}")]
    NotFound(String),

    #[error("Invalid snippet name '{0}'")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
