//! Errores de persistencia.
//! Mapea errores de Diesel / conexión / toolkit químico a variantes semánticas
//! de la capa de consultas.

use qm9_domain::DomainError;
use thiserror::Error;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Selector no soportado en el filtro (p. ej. método de embedding).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("structure toolkit error: {0}")]
    Toolkit(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("not found")]
    NotFound,
    #[error("serialization conflict (retryable)")]
    SerializationConflict,
    #[error("transient IO / connection pool error: {0}")]
    TransientIo(String),
    #[error("unknown database error: {0}")]
    Unknown(String),
}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(kind, info) => match kind {
                        DatabaseErrorKind::SerializationFailure => Self::SerializationConflict,
                        DatabaseErrorKind::ClosedConnection => Self::TransientIo(info.message().to_string()),
                        other => Self::Unknown(format!("db error kind {:?}: {}", other, info.message())),
                    },
            DieselError::DeserializationError(e) => Self::Unknown(format!("deser: {e}")),
            DieselError::SerializationError(e) => Self::Unknown(format!("ser: {e}")),
            DieselError::BrokenTransactionManager => Self::TransientIo("broken transaction manager".into()),
            DieselError::QueryBuilderError(e) => Self::Unknown(format!("query builder: {e}")),
            DieselError::InvalidCString(e) => Self::Unknown(format!("invalid cstring: {e}")),
            other => Self::Unknown(format!("unhandled diesel error: {other:?}")),
        }
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            other => Self::Toolkit(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_keeps_its_class() {
        let err: PersistenceError = DomainError::InvalidArgument("Invalid embedding method: x".into()).into();
        assert!(matches!(err, PersistenceError::InvalidArgument(ref m) if m.contains("x")));
    }

    #[test]
    fn other_domain_errors_are_toolkit_errors() {
        let err: PersistenceError = DomainError::ExternalError("rdkit".into()).into();
        assert!(matches!(err, PersistenceError::Toolkit(_)));
    }

    #[test]
    fn diesel_not_found() {
        assert!(matches!(PersistenceError::from(DieselError::NotFound), PersistenceError::NotFound));
    }
}
