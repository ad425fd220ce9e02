use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompendiumError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown basis: {0}")]
    UnknownBasis(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CompendiumError>;
