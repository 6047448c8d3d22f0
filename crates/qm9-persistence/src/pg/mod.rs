//! Acceso Postgres (Diesel) a la base de snapshots.
//!
//! - `snapshots`: operaciones de consulta (todas reciben la conexión del
//!   llamador como primer argumento y ejecutan a lo sumo una query).
//! - `columns`: registros nombre de columna → constructor de predicado.
//! - Este módulo: pool r2d2 y proveedor de conexiones para binarios y tests.
//!   Las funciones de consulta no abren ni cierran conexiones por su cuenta.

pub mod columns;
pub mod snapshots;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager};
use log::{debug, warn};

use crate::error::PersistenceError;

/// Alias de tipo para el pool r2d2 de conexiones Postgres.
pub type PgPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Conexión tomada del pool; `DerefMut` a `PgConnection`.
pub type PooledPgConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Proveedor abstracto de conexiones.
///
/// Contrato:
/// - Debe devolver una conexión válida o `PersistenceError::TransientIo` en
///   caso de error.
pub trait ConnectionProvider: Send + Sync + 'static {
    fn connection(&self) -> Result<PooledPgConnection, PersistenceError>;
}

/// Implementación concreta de `ConnectionProvider` respaldada por un `PgPool`.
pub struct PoolProvider {
    pub pool: PgPool,
}
impl ConnectionProvider for PoolProvider {
    fn connection(&self) -> Result<PooledPgConnection, PersistenceError> {
        self.pool
            .get()
            .map_err(|e| PersistenceError::TransientIo(format!("pool error: {e}")))
    }
}

/// Construye un pool Postgres r2d2 a partir de URL.
///
/// Valida y ajusta tamaños (si `min_size > max_size`, usa `min_size =
/// max_size`). No ejecuta migraciones: el esquema pertenece a la ingesta.
pub fn build_pool(database_url: &str, min_size: u32, max_size: u32) -> Result<PgPool, PersistenceError> {
    let validated_min = if min_size == 0 { 1 } else { min_size };
    let validated_max = if max_size == 0 { 1 } else { max_size };
    if validated_min > validated_max {
        warn!("min_size > max_size ({} > {}), ajustando min=max", validated_min, validated_max);
    }
    let final_min = validated_min.min(validated_max);
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().min_idle(Some(final_min))
                                    .max_size(validated_max)
                                    .build(manager)
                                    .map_err(|e| PersistenceError::TransientIo(format!("pool build: {e}")))?;
    debug!("build_pool:done min={final_min} max={validated_max}");
    Ok(pool)
}

/// Carga `.env`, lee configuración (DATABASE_URL, tamaños) y construye el
/// pool.
pub fn build_pool_from_env() -> Result<PgPool, PersistenceError> {
    crate::config::init_dotenv();
    let cfg = crate::config::DbConfig::from_env()?;
    build_pool(&cfg.url, cfg.min_connections, cfg.max_connections)
}
