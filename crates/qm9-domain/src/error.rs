// error.rs
use thiserror::Error;

/// Error del dominio de consultas sobre snapshots.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Selector no soportado (p. ej. método de embedding desconocido).
    #[error("Argumento inválido: {0}")]
    InvalidArgument(String),

    #[error("Error externo: {0}")]
    ExternalError(String),

    #[error("Error de serialización: {0}")]
    SerializationError(String),
}

// Conversión desde EngineError (solo con el toolkit RDKit habilitado)
#[cfg(feature = "rdkit")]
impl From<qm9_engine::EngineError> for DomainError {
    fn from(e: qm9_engine::EngineError) -> Self {
        DomainError::ExternalError(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::SerializationError(e.to_string())
    }
}
