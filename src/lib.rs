//! qm9star-query: capa de consultas de solo lectura sobre la base de
//! snapshots QM9star.
//!
//! - [`domain`]: filtros, selectores de similitud y contrato del toolkit químico.
//! - [`persistence`]: esquema Diesel, pool y operaciones de consulta.
//!
//! Además expone la entrada que usan los clientes que envían el filtro como
//! JSON crudo ([`search_json`]). Los campos JSON desconocidos se ignoran, igual
//! que las columnas desconocidas dentro de cada grupo de filtros.

pub use qm9_domain as domain;
pub use qm9_persistence as persistence;

use thiserror::Error;

use qm9_domain::{DomainError, Page, SnapshotFilter, StructureToolkit};
use qm9_persistence::{PersistenceError, PgConnection, Snapshot};

#[derive(Debug, Error)]
pub enum QueryError {
    /// El cuerpo del filtro no es JSON válido para `SnapshotFilter`.
    #[error("filtro inválido: {0}")]
    BadFilter(#[from] DomainError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Interpreta un filtro JSON opcional (`None`, vacío o `null` = sin filtro).
pub fn parse_filter(filter_json: Option<&str>) -> Result<Option<SnapshotFilter>, QueryError> {
    match filter_json.map(str::trim) {
        None | Some("") | Some("null") => Ok(None),
        Some(raw) => Ok(Some(SnapshotFilter::from_json(raw)?)),
    }
}

/// Búsqueda filtrada con el filtro en JSON crudo.
pub fn search_json<T>(conn: &mut PgConnection,
                      toolkit: &T,
                      filter_json: Option<&str>,
                      page: Page)
                      -> Result<Vec<Snapshot>, QueryError>
    where T: StructureToolkit + ?Sized
{
    let filter = parse_filter(filter_json)?;
    Ok(qm9_persistence::get_snapshots_by_conditions(conn, toolkit, filter.as_ref(), page)?)
}
