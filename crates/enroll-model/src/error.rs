use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("missing mandatory columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
