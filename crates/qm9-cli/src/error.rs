use qm9_domain::DomainError;
use qm9_persistence::PersistenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Persistence(#[from] PersistenceError),
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("no se pudo leer {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("salida JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
