//! Entrada JSON de extremo a extremo; requiere DATABASE_URL (se omite si no está).

use qm9star_query::domain::{DomainError, ElementCounts, EmbeddingMethod, Page, StructureToolkit};
use qm9star_query::persistence::{build_conditions_query, get_snapshot_count, PgConnection};
use qm9star_query::{parse_filter, search_json, QueryError};

struct NoToolkit;

impl StructureToolkit for NoToolkit {
    fn formula_counts(&self, _smiles: &str) -> Result<ElementCounts, DomainError> {
        Err(DomainError::ExternalError("sin toolkit".into()))
    }

    fn fingerprint(&self, _smiles: &str, _method: EmbeddingMethod) -> Result<Vec<f32>, DomainError> {
        Err(DomainError::ExternalError("sin toolkit".into()))
    }
}

#[test]
fn json_filter_builds_the_same_query_as_typed_filter() {
    let filter = parse_filter(Some(r#"{"element_filters": [{"element": "F", "count": -1}]}"#)).unwrap();
    let typed = qm9star_query::domain::SnapshotFilter::default().with_element("F", -1);
    assert_eq!(filter.as_ref(), Some(&typed));
    assert!(build_conditions_query(&NoToolkit, filter.as_ref(), Page::default()).is_ok());
}

#[test]
fn invalid_method_in_json_is_invalid_argument() {
    let filter = parse_filter(Some(r#"{"smiles": "CCO", "method": "mhfp"}"#)).unwrap();
    let err = build_conditions_query(&NoToolkit, filter.as_ref(), Page::default()).err().expect("query must fail");
    assert!(matches!(err, qm9star_query::persistence::PersistenceError::InvalidArgument(_)));
}

#[test]
fn search_json_against_database() {
    use diesel_conn::establish;
    let Some(mut conn) = establish() else {
        eprintln!("skip search_json_against_database (no DATABASE_URL)");
        return;
    };
    let total = get_snapshot_count(&mut conn).expect("count").count;
    let rows = search_json(&mut conn, &NoToolkit, Some("{}"), Page::new(0, 3)).expect("search");
    assert_eq!(rows.len() as i64, total.min(3));
    assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    let err = search_json(&mut conn, &NoToolkit, Some(r#"{"element_filters": 3}"#), Page::default()).err().expect("query must fail");
    assert!(matches!(err, QueryError::BadFilter(_)));
}

mod diesel_conn {
    use super::PgConnection;
    use qm9star_query::persistence::config::DbConfig;

    pub fn establish() -> Option<PgConnection> {
        use diesel::Connection;
        std::env::var("DATABASE_URL").ok()?;
        let cfg = DbConfig::from_env().ok()?;
        PgConnection::establish(&cfg.url).ok()
    }
}
