use qm9_domain::{DistanceMetric, DomainError, EmbeddingMethod, ItemCount, Page, SnapshotFilter};
use serde_json::json;

#[test]
fn test_empty_json_filter_uses_defaults() {
    let filter = SnapshotFilter::from_json("{}").unwrap();
    assert!(filter.element_filters.is_empty());
    assert!(filter.numeric_filters.is_empty());
    assert!(filter.class_filters.is_empty());
    assert!(filter.bool_filters.is_empty());
    assert_eq!(filter.smiles, None);
    assert_eq!(filter.method, "morgan");
    assert_eq!(filter.distance, "l2");
    assert_eq!(filter, SnapshotFilter::default());
}

#[test]
fn test_full_json_filter() {
    let raw = json!({
        "element_filters": [{"element": "C", "count": -1}, {"element": "N", "count": 2}],
        "numeric_filters": [{"column": "alpha_gap", "min": 0.1, "max": 0.3}],
        "class_filters": [{"column": "species", "values": ["cation", "anion"]}],
        "bool_filters": [{"column": "is_optimized", "value": true}],
        "smiles": "CCO",
        "method": "torsion",
        "distance": "cosine"
    });
    let filter: SnapshotFilter = serde_json::from_value(raw).unwrap();
    assert_eq!(filter.element_filters.len(), 2);
    assert_eq!(filter.element_filters[0].count, -1);
    assert_eq!(filter.numeric_filters[0].column, "alpha_gap");
    assert_eq!(filter.class_filters[0].values, vec!["cation", "anion"]);
    assert!(filter.bool_filters[0].value);
    assert_eq!(filter.embedding_method().unwrap(), EmbeddingMethod::Torsion);
    assert_eq!(filter.distance_metric(), Some(DistanceMetric::Cosine));
}

#[test]
fn test_builder_matches_json() {
    let built = SnapshotFilter::default().with_element("O", 1)
                                         .with_range("temperature", 298.0, 299.0)
                                         .with_class("functional", ["B3LYP"])
                                         .with_bool("is_ts", false)
                                         .with_similarity("c1ccccc1", "rdk", "inner_product");
    let parsed = SnapshotFilter::from_json(&serde_json::to_string(&built).unwrap()).unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_unknown_method_rejected_unknown_distance_ignored() {
    let filter = SnapshotFilter::default().with_similarity("C", "ecfp", "hamming");
    assert!(matches!(filter.embedding_method(), Err(DomainError::InvalidArgument(_))));
    assert_eq!(filter.distance_metric(), None);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = SnapshotFilter::from_json("{\"element_filters\": 3}").unwrap_err();
    assert!(matches!(err, DomainError::SerializationError(_)));
}

#[test]
fn test_page_defaults_and_next() {
    let page = Page::default();
    assert_eq!(page, Page::new(0, 100));
    assert_eq!(page.next(), Page::new(100, 100));
    assert_eq!(Page::new(5, 10).next().next(), Page::new(25, 10));
}

#[test]
fn test_page_next_saturates_on_huge_limit() {
    let page = Page::new(0, i64::MAX).next().next();
    assert_eq!(page, Page::new(i64::MAX, i64::MAX));
}

#[test]
fn test_item_count_serializes_as_object() {
    assert_eq!(serde_json::to_value(ItemCount { count: 7 }).unwrap(), json!({"count": 7}));
}
