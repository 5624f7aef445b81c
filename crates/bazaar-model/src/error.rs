use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record has no id or _id field")]
    MissingId,
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("expected a JSON array of records, got {0}")]
    NotAnArray(&'static str),
}

pub type Result<T> = std::result::Result<T, ModelError>;
