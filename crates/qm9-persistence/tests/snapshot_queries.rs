//! Operaciones de consulta contra Postgres (requiere DATABASE_URL y la
//! extensión `vector`). Cada test corre en una transacción de test con tablas
//! temporales, así que no toca datos reales.


use qm9_domain::{Page, SnapshotFilter};
use qm9_persistence::pg::snapshots::{DEFAULT_CHARGE, DEFAULT_MULTIPLICITY};
use qm9_persistence::{get_snapshot_by_id, get_snapshot_by_smiles_hash, get_snapshot_count, get_snapshot_detail,
                      get_snapshot_ids, get_snapshots_by_charge_multi, get_snapshots_by_conditions,
                      PersistenceError};
use test_support::{ids, with_fixture, FakeToolkit};

fn search_ids(conn: &mut diesel::PgConnection, filter: &SnapshotFilter) -> Vec<i32> {
    ids(&get_snapshots_by_conditions(conn, &FakeToolkit, Some(filter), Page::default()).expect("search"))
}

#[test]
fn ids_and_count_cover_the_table() {
    with_fixture("ids_and_count_cover_the_table", |conn| {
        assert_eq!(get_snapshot_ids(conn).unwrap(), vec![1, 2, 3, 4, 5]);
        let count = get_snapshot_count(conn).unwrap();
        assert_eq!(count.count, 5);
        let all = get_snapshots_by_conditions(conn, &FakeToolkit, None, Page::new(0, i64::MAX)).unwrap();
        assert_eq!(all.len() as i64, count.count);
    });
}

#[test]
fn get_by_id_present_and_absent() {
    with_fixture("get_by_id_present_and_absent", |conn| {
        let snap = get_snapshot_by_id(conn, 3).unwrap().expect("snapshot 3");
        assert_eq!(snap.hash_token, "h3");
        assert_eq!(snap.functional.as_deref(), Some("B3LYP"));
        assert!(!snap.is_optimized);
        assert!(get_snapshot_by_id(conn, 99).unwrap().is_none());
    });
}

#[test]
fn pagination_yields_contiguous_disjoint_slices() {
    with_fixture("pagination_yields_contiguous_disjoint_slices", |conn| {
        let mut page = Page::new(0, 2);
        let mut collected = Vec::new();
        loop {
            let rows = get_snapshots_by_conditions(conn, &FakeToolkit, None, page).unwrap();
            if rows.is_empty() {
                break;
            }
            collected.extend(ids(&rows));
            page = page.next();
        }
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    });
}

#[test]
fn element_filters() {
    with_fixture("element_filters", |conn| {
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_element("C", -1)), vec![1, 2, 3, 5]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_element("C", 2)), vec![1, 2]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_element("C", 0)), vec![4]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_element("O", 1).with_element("H", 2)),
                   vec![4]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_element("Xx", 3)), vec![1, 2, 3, 4, 5]);
        assert!(search_ids(conn, &SnapshotFilter::default().with_element("I", -1)).is_empty());
        assert!(search_ids(conn, &SnapshotFilter::default().with_element("U", 2)).is_empty());
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_element("I", 0)), vec![1, 2, 3, 4, 5]);
    });
}

#[test]
fn numeric_filters() {
    with_fixture("numeric_filters", |conn| {
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_range("temperature", 290.0, 300.0)),
                   vec![1, 3, 4, 5]);
        // columnas nulas no satisfacen el rango
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_range("alpha_gap", 0.0, 1.0)),
                   vec![1, 2, 3, 5]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_range("atom_number", 6.5, 8.0)), vec![3, 5]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_range("total_charge", 0.5, 1.5)), vec![4]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_range("molwt", 40.0, 50.0)), vec![1, 2]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_range("U_0", -156.0, -155.02)), vec![1]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_range("boiling_point", 0.0, 1.0)),
                   vec![1, 2, 3, 4, 5]);
    });
}

#[test]
fn class_and_bool_filters() {
    with_fixture("class_and_bool_filters", |conn| {
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_class("functional", ["B3LYP"])),
                   vec![1, 3, 4]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_class("species", ["cation", "anion"])),
                   vec![4]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_bool("is_ts", true)), vec![2]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_bool("is_optimized", false)), vec![3]);
        assert_eq!(search_ids(conn, &SnapshotFilter::default().with_bool("is_cool", false)), vec![1, 2, 3, 4, 5]);
    });
}

#[test]
fn similarity_ordering() {
    with_fixture("similarity_ordering", |conn| {
        // la molécula 3 coincide con la huella de consulta; el resto empata y
        // se desempata por id
        for distance in ["l2", "cosine", "inner_product"] {
            let filter = SnapshotFilter::default().with_similarity("[OH2+]", "morgan", distance);
            assert_eq!(search_ids(conn, &filter), vec![4, 1, 2, 3, 5], "distance={distance}");
        }
        let filter = SnapshotFilter::default().with_similarity("CN", "torsion", "l2")
                                              .with_bool("is_optimized", true);
        assert_eq!(search_ids(conn, &filter), vec![5, 1, 2, 4]);
    });
}

#[test]
fn invalid_method_returns_no_results() {
    with_fixture("invalid_method_returns_no_results", |conn| {
        let filter = SnapshotFilter::default().with_similarity("CCO", "ecfp4", "l2");
        let result = get_snapshots_by_conditions(conn, &FakeToolkit, Some(&filter), Page::default());
        assert!(matches!(result, Err(PersistenceError::InvalidArgument(_))));
    });
}

#[test]
fn lookup_by_smiles_and_hash() {
    with_fixture("lookup_by_smiles_and_hash", |conn| {
        let snap = get_snapshot_by_smiles_hash(conn, &FakeToolkit, "CCO", "h2").unwrap().expect("h2");
        assert_eq!(snap.id, 2);
        assert!(get_snapshot_by_smiles_hash(conn, &FakeToolkit, "CCO", "h3").unwrap().is_none());
        assert!(get_snapshot_by_smiles_hash(conn, &FakeToolkit, "CN", "h1").unwrap().is_none());
        let water = get_snapshot_by_smiles_hash(conn, &FakeToolkit, "[OH2+]", "h4").unwrap();
        assert_eq!(water.map(|s| s.id), Some(4));
    });
}

#[test]
fn charge_multiplicity_lookup_is_unpaginated() {
    with_fixture("charge_multiplicity_lookup_is_unpaginated", |conn| {
        let neutral = get_snapshots_by_charge_multi(conn, DEFAULT_CHARGE, DEFAULT_MULTIPLICITY).unwrap();
        assert_eq!(ids(&neutral), vec![1, 2, 3, 5]);
        assert_eq!(ids(&get_snapshots_by_charge_multi(conn, 1, 2).unwrap()), vec![4]);
        assert!(get_snapshots_by_charge_multi(conn, -1, 2).unwrap().is_empty());
    });
}

#[test]
fn detail_joins_molecule_and_formula() {
    with_fixture("detail_joins_molecule_and_formula", |conn| {
        let detail = get_snapshot_detail(conn, 4).unwrap().expect("detail");
        assert_eq!(detail.molecule.smiles, "[OH2+]");
        assert_eq!(detail.molecule.total_multiplicity, 2);
        assert_eq!(detail.molecule.qed, None);
        assert_eq!(detail.formula.formula_string, "H2O1");
        assert!(get_snapshot_detail(conn, 42).unwrap().is_none());
    });
}
