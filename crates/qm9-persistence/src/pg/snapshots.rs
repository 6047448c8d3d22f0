//! Operaciones de consulta sobre snapshots.
//!
//! Todas reciben la conexión del llamador como primer argumento; ninguna
//! abre, cierra ni reintenta. La búsqueda filtrada compone la consulta por
//! capas sobre el join `snapshot ⋈ molecule ⋈ formula`:
//!
//! 1. filtros por elemento (conteo exacto, o presencia si el conteo es < 0);
//! 2. rangos numéricos, ruteados a la tabla dueña de la columna;
//! 3. filtros categóricos (pertenencia a un conjunto);
//! 4. filtros booleanos;
//! 5. orden por similitud de huella (opcional).
//!
//! Finalmente se ordena por `snapshot.id` y se pagina. Columnas o elementos
//! desconocidos se ignoran; un método de embedding desconocido aborta la
//! búsqueda con `PersistenceError::InvalidArgument` antes de ejecutar nada.

use diesel::dsl;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::IntoSql;
use log::debug;
use pgvector::{Vector, VectorExpressionMethods};

use qm9_domain::periodic_table::is_element;
use qm9_domain::{formula_string, BoolFilter, ClassFilter, DistanceMetric, ElementFilter, EmbeddingMethod, ItemCount,
                 NumericFilter, Page, SnapshotFilter, StructureToolkit};

use crate::error::PersistenceError;
use crate::models::{Formula, Molecule, Snapshot, SnapshotDetail};
use crate::pg::columns;
use crate::schema::{formula, molecule, snapshot};

type SnapshotJoin = dsl::InnerJoin<snapshot::table, dsl::InnerJoin<molecule::table, formula::table>>;

/// Consulta boxeada de snapshots sobre el join de tres tablas.
pub type SnapshotQuery = dsl::IntoBoxed<'static, dsl::Select<SnapshotJoin, dsl::AsSelect<Snapshot, Pg>>, Pg>;

pub const DEFAULT_CHARGE: i32 = 0;
pub const DEFAULT_MULTIPLICITY: i32 = 1;

fn base_query() -> SnapshotQuery {
    snapshot::table.inner_join(molecule::table.inner_join(formula::table))
                   .select(Snapshot::as_select())
                   .into_boxed()
}

/// Todos los ids de snapshot, ascendentes.
pub fn get_snapshot_ids(conn: &mut PgConnection) -> Result<Vec<i32>, PersistenceError> {
    let ids: Vec<i32> = snapshot::table.select(snapshot::id).order(snapshot::id.asc()).load(conn)?;
    debug!("get_snapshot_ids:done count={}", ids.len());
    Ok(ids)
}

/// Snapshot por id; `None` si no existe.
pub fn get_snapshot_by_id(conn: &mut PgConnection, snapshot_id: i32) -> Result<Option<Snapshot>, PersistenceError> {
    let row: Option<Snapshot> = snapshot::table.find(snapshot_id)
                                               .select(Snapshot::as_select())
                                               .first(conn)
                                               .optional()?;
    debug!("get_snapshot_by_id:done id={snapshot_id} found={}", row.is_some());
    Ok(row)
}

/// Busca el snapshot cuya fórmula, SMILES y token de integridad coinciden.
///
/// La fórmula se deriva del SMILES con el toolkit y se compara contra
/// `formula.formula_string`. Devuelve a lo sumo un resultado (el de menor id).
pub fn get_snapshot_by_smiles_hash<T>(conn: &mut PgConnection,
                                      toolkit: &T,
                                      smiles: &str,
                                      snapshot_hash: &str)
                                      -> Result<Option<Snapshot>, PersistenceError>
    where T: StructureToolkit + ?Sized
{
    let formula_str = formula_string(&toolkit.formula_counts(smiles)?);
    debug!("get_snapshot_by_smiles_hash:start formula={formula_str}");
    let row: Option<Snapshot> = snapshot::table.inner_join(molecule::table.inner_join(formula::table))
                                               .filter(formula::formula_string.eq(&formula_str))
                                               .filter(molecule::smiles.eq(smiles))
                                               .filter(snapshot::hash_token.eq(snapshot_hash))
                                               .order(snapshot::id.asc())
                                               .select(Snapshot::as_select())
                                               .first(conn)
                                               .optional()?;
    debug!("get_snapshot_by_smiles_hash:done found={}", row.is_some());
    Ok(row)
}

fn apply_element_filters(mut query: SnapshotQuery, filters: &[ElementFilter]) -> SnapshotQuery {
    for f in filters {
        if !is_element(&f.element) {
            debug!("skip element filter: unknown symbol={}", f.element);
            continue;
        }
        match columns::element_predicate(&f.element) {
            Some(predicate) => query = predicate(query, f.count),
            // elemento sin columna en `formula`: su conteo almacenado es 0
            None if f.count == 0 => debug!("element filter always true: symbol={} count=0", f.element),
            None => {
                debug!("element filter always false: no formula column for symbol={}", f.element);
                query = query.filter(false.into_sql::<Bool>());
            }
        }
    }
    query
}

fn apply_numeric_filters(mut query: SnapshotQuery, filters: &[NumericFilter]) -> SnapshotQuery {
    for f in filters {
        match columns::range_predicate(&f.column) {
            Some((scope, predicate)) => {
                debug!("numeric filter column={} scope={:?} [{}, {}]", f.column, scope, f.min, f.max);
                query = predicate(query, f.min, f.max);
            }
            None => debug!("skip numeric filter: unknown column={}", f.column),
        }
    }
    query
}

fn apply_class_filters(mut query: SnapshotQuery, filters: &[ClassFilter]) -> SnapshotQuery {
    for f in filters {
        match columns::class_predicate(&f.column) {
            Some(predicate) => query = predicate(query, f.values.clone()),
            None => debug!("skip class filter: unknown column={}", f.column),
        }
    }
    query
}

fn apply_bool_filters(mut query: SnapshotQuery, filters: &[BoolFilter]) -> SnapshotQuery {
    for f in filters {
        match columns::bool_predicate(&f.column) {
            Some(predicate) => query = predicate(query, f.value),
            None => debug!("skip bool filter: unknown column={}", f.column),
        }
    }
    query
}

macro_rules! order_by_distance {
    ($query:expr, $fp:expr, $metric:expr, $embedding:expr) => {
        match $metric {
            DistanceMetric::L2 => $query.order_by($fp.l2_distance($embedding)),
            DistanceMetric::InnerProduct => $query.order_by($fp.max_inner_product($embedding)),
            DistanceMetric::Cosine => $query.order_by($fp.cosine_distance($embedding)),
        }
    };
}

fn apply_similarity<T>(query: SnapshotQuery,
                       toolkit: &T,
                       smiles: &str,
                       method: EmbeddingMethod,
                       metric: Option<DistanceMetric>)
                       -> Result<SnapshotQuery, PersistenceError>
    where T: StructureToolkit + ?Sized
{
    let embedding = Vector::from(toolkit.fingerprint(smiles, method)?);
    let Some(metric) = metric else {
        debug!("skip similarity ordering: unknown distance");
        return Ok(query);
    };
    debug!("similarity ordering method={method} distance={metric}");
    let ordered = match method {
        EmbeddingMethod::Morgan => order_by_distance!(query, molecule::morgan_fp3_1024, metric, embedding),
        EmbeddingMethod::Rdk => order_by_distance!(query, molecule::rdkit_fp_1024, metric, embedding),
        EmbeddingMethod::AtomPair => order_by_distance!(query, molecule::atompair_fp_1024, metric, embedding),
        EmbeddingMethod::Torsion => order_by_distance!(query, molecule::topological_torsion_fp_1024, metric, embedding),
    };
    Ok(ordered)
}

/// Compone (sin ejecutar) la búsqueda filtrada y paginada.
pub fn build_conditions_query<T>(toolkit: &T,
                                 snapshot_filter: Option<&SnapshotFilter>,
                                 page: Page)
                                 -> Result<SnapshotQuery, PersistenceError>
    where T: StructureToolkit + ?Sized
{
    let mut query = base_query();
    if let Some(filter) = snapshot_filter {
        query = apply_element_filters(query, &filter.element_filters);
        query = apply_numeric_filters(query, &filter.numeric_filters);
        query = apply_class_filters(query, &filter.class_filters);
        query = apply_bool_filters(query, &filter.bool_filters);
        if let Some(smiles) = &filter.smiles {
            let method = filter.embedding_method()?;
            query = apply_similarity(query, toolkit, smiles, method, filter.distance_metric())?;
        }
    }
    // el id queda como última clave de orden (desempate tras la similitud)
    Ok(query.then_order_by(snapshot::id.asc()).offset(page.skip).limit(page.limit))
}

/// Búsqueda filtrada y paginada; ver la documentación del módulo.
pub fn get_snapshots_by_conditions<T>(conn: &mut PgConnection,
                                      toolkit: &T,
                                      snapshot_filter: Option<&SnapshotFilter>,
                                      page: Page)
                                      -> Result<Vec<Snapshot>, PersistenceError>
    where T: StructureToolkit + ?Sized
{
    debug!("get_snapshots_by_conditions:start skip={} limit={} filtered={}",
           page.skip,
           page.limit,
           snapshot_filter.is_some());
    let query = build_conditions_query(toolkit, snapshot_filter, page)?;
    let rows: Vec<Snapshot> = query.load(conn)?;
    debug!("get_snapshots_by_conditions:done count={}", rows.len());
    Ok(rows)
}

/// Total de filas de `snapshot` (sin filtrar).
pub fn get_snapshot_count(conn: &mut PgConnection) -> Result<ItemCount, PersistenceError> {
    let count: i64 = snapshot::table.count().get_result(conn)?;
    Ok(ItemCount { count })
}

/// Snapshots cuya molécula tiene exactamente esa carga y multiplicidad. Sin
/// paginación.
pub fn get_snapshots_by_charge_multi(conn: &mut PgConnection,
                                     charge: i32,
                                     multiplicity: i32)
                                     -> Result<Vec<Snapshot>, PersistenceError> {
    let rows: Vec<Snapshot> = snapshot::table.inner_join(molecule::table)
                                             .filter(molecule::total_charge.eq(charge))
                                             .filter(molecule::total_multiplicity.eq(multiplicity))
                                             .order(snapshot::id.asc())
                                             .select(Snapshot::as_select())
                                             .load(conn)?;
    debug!("get_snapshots_by_charge_multi:done charge={charge} multiplicity={multiplicity} count={}",
           rows.len());
    Ok(rows)
}

/// Snapshot con su molécula y fórmula; `None` si el id no existe.
pub fn get_snapshot_detail(conn: &mut PgConnection, snapshot_id: i32) -> Result<Option<SnapshotDetail>, PersistenceError> {
    let row = snapshot::table.inner_join(molecule::table.inner_join(formula::table))
                             .filter(snapshot::id.eq(snapshot_id))
                             .select((Snapshot::as_select(), Molecule::as_select(), Formula::as_select()))
                             .first::<(Snapshot, Molecule, Formula)>(conn)
                             .optional()?;
    Ok(row.map(|(snapshot_row, molecule_row, formula_row)| SnapshotDetail { snapshot: snapshot_row,
                                                                          molecule: molecule_row,
                                                                          formula: formula_row }))
}
