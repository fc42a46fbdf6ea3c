// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end scenarios over a realistic document

use arbor_core::{ArborError, Path, Tree};
use arbor_ops::{
    CloneOptions, count_matches, deep_clone_with, deep_filter, deep_get, deep_get_key,
    deep_remove_all_key, deep_remove_key, exists, found_truthy, locate, locate_all_key,
    locate_key, match_depth, max_depth, only_existing, only_falsy, only_missing, only_truthy,
    rename_key, rename_keys,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn t(value: serde_json::Value) -> Tree {
    Tree::from(value)
}

fn inventory() -> Tree {
    t(json!({
        "store": "north",
        "items": [
            {"sku": "A1", "name": "bolt", "stock": 12, "tags": ["metal"]},
            {"sku": "B2", "name": "nut", "stock": 0, "tags": []},
            {"sku": "C3", "name": "gear", "stock": 4, "meta": {"sku": "legacy"}}
        ],
        "meta": {"updated": "2024-01-01", "owner": {"name": "ops"}}
    }))
}

#[test]
fn test_nested_locate_examples() {
    init_tracing();
    let tree = t(json!({"a": {"b": {"c": 1}}}));
    assert_eq!(locate(&tree, &t(json!({"c": 1})), None).unwrap(), "a.b");
    assert_eq!(locate(&tree, &t(json!(1)), None).unwrap(), "a.b.c");
    assert_eq!(max_depth(&tree, None), 3);
    assert_eq!(
        deep_remove_key(&t(json!({"a": 1, "b": {"a": 2}})), "a", None).unwrap(),
        t(json!({"b": {"a": 2}}))
    );
}

#[test]
fn test_find_record_by_partial_shape() {
    init_tracing();
    let tree = inventory();
    let record = deep_get(&tree, &t(json!({"name": "nut"})), None);
    assert_eq!(record.and_then(|r| r.get_key("sku")), Some(&t(json!("B2"))));
    assert_eq!(match_depth(&tree, &t(json!({"name": "nut"})), None), Some(2));
    let untagged = deep_filter(&tree, &t(json!({"tags": []})), None);
    assert_eq!(untagged.len(), 1);
    assert_eq!(untagged[0].get_key("name"), Some(&t(json!("nut"))));
}

#[test]
fn test_key_search_across_levels() {
    init_tracing();
    let tree = inventory();
    let parents: Vec<String> = locate_all_key(&tree, "sku", None)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(parents, vec!["items.0", "items.1", "items.2", "items.2.meta"]);
    assert_eq!(locate_key(&tree, "owner", None).unwrap(), Some(Path::parse("meta")));
    assert_eq!(deep_get_key(&tree, "owner", None).unwrap(), Some(&t(json!({"name": "ops"}))));
}

#[test]
fn test_scrub_and_rename_copies() {
    init_tracing();
    let tree = inventory();
    let scrubbed = deep_remove_all_key(&tree, "sku", None).unwrap();
    assert!(locate_all_key(&scrubbed, "sku", None).unwrap().is_empty());
    assert_eq!(scrubbed.get_key("store"), Some(&t(json!("north"))));

    let renamed = rename_keys(&tree, "sku", "id", Some(3)).unwrap();
    // The legacy sku sits in a mapping at depth 3 and is out of reach
    assert_eq!(locate_all_key(&renamed, "id", None).unwrap().len(), 3);
    assert_eq!(locate_all_key(&renamed, "sku", None).unwrap().len(), 1);

    let first = rename_key(&tree, "name", "label", None).unwrap();
    assert_eq!(locate_all_key(&first, "label", None).unwrap().len(), 1);
    assert_eq!(tree, inventory());
}

#[test]
fn test_windowed_clone_of_records() {
    let tree = inventory();
    let records = deep_clone_with(&tree, &CloneOptions::new().start_depth(2).max_depth(3));
    let skus: Vec<Option<&Tree>> = records
        .entries()
        .filter_map(|(_, record)| record.as_mapping())
        .map(|record| record.get("sku"))
        .collect();
    // Five nodes sit at depth 2; the owner mapping has no sku
    assert_eq!(records.key_count(), 5);
    assert_eq!(skus.len(), 4);
    assert_eq!(skus[3], None);
    assert_eq!(skus[0], Some(&t(json!("A1"))));
    // Tags lists sit at depth 3 and are copied empty
    let first = records.get_key("0").and_then(|r| r.get_key("tags"));
    assert_eq!(first, Some(&t(json!([]))));
}

#[test]
fn test_stock_filters() {
    init_tracing();
    let tree = inventory();
    let names = t(json!(["bolt", "nut", "gear", "widget"]));
    assert_eq!(
        only_existing(&tree, &names, None),
        Some(t(json!(["bolt", "nut", "gear"])))
    );
    assert_eq!(only_missing(&tree, &names, None), Some(t(json!(["widget"]))));
    assert_eq!(
        only_truthy(&tree, &names, &t(json!("stock")), None),
        Ok(Some(t(json!(["bolt", "gear"]))))
    );
    assert_eq!(
        only_falsy(&tree, &names, &t(json!({"stock": null})), None),
        Ok(Some(t(json!(["nut"]))))
    );
    assert_eq!(found_truthy(&tree, &t(json!("stock")), Some(1)), Ok(false));
    assert_eq!(
        only_truthy(&tree, &names, &t(json!([])), None),
        Err(ArborError::InvalidProperty {
            kind: arbor_core::Kind::Sequence
        })
    );
}

#[test]
fn test_counting() {
    let tree = inventory();
    assert!(exists(&tree, &t(json!("ops")), None));
    assert!(!exists(&tree, &t(json!("ops")), Some(2)));
    assert_eq!(count_matches(&tree, &t(json!({"sku": "legacy"})), None, None), 1);
    assert_eq!(count_matches(&tree, &t(json!({"stock": 0})), Some(2), None), 1);
}
