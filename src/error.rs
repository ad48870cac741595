use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid publication date: {0}")]
    InvalidDate(#[from] chrono::format::ParseError),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Unknown material kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
