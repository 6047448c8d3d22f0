//! qm9-persistence
//!
//! Capa de consultas de solo lectura (Diesel + pgvector) sobre la base de
//! snapshots químicos: `snapshot` → `molecule` → `formula`.
//!
//! Módulos:
//! - `pg`: pool de conexiones y operaciones de consulta (`pg::snapshots`).
//! - `models`: filas mapeadas.
//! - `config`: carga de configuración desde .env.
//! - `schema`: tablas Diesel declaradas para compilar queries.

pub mod config;
pub mod error;
pub mod models;
pub mod pg;
pub mod schema;

pub use config::init_dotenv;
pub use error::PersistenceError;
pub use models::{Formula, Molecule, Snapshot, SnapshotDetail};
pub use pg::snapshots::{build_conditions_query, get_snapshot_by_id, get_snapshot_by_smiles_hash, get_snapshot_count,
                        get_snapshot_detail, get_snapshot_ids, get_snapshots_by_charge_multi,
                        get_snapshots_by_conditions, SnapshotQuery};
pub use pg::{build_pool, build_pool_from_env, ConnectionProvider, PgPool, PoolProvider};
pub use diesel::pg::PgConnection;
