#![allow(missing_docs)]

use bazaar_model::{ListParams, Record, Resource};
use serde_json::json;

#[test]
fn test_list_ingest_normalizes_ids() {
    let body = json!([
        {"id": "a1", "name": "Apple"},
        {"_id": "b2", "name": "Banana"},
        {"id": 3, "name": "Cherry"},
    ]);
    let records = Record::from_list(body).expect("ingest list");
    let ids: Vec<_> = records.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, ["a1", "b2", "3"]);
}

#[test]
fn test_list_ingest_rejects_non_arrays() {
    assert!(Record::from_list(json!({"data": []})).is_err());
    assert!(Record::from_list(json!("nope")).is_err());
}

#[test]
fn test_list_ingest_rejects_idless_members() {
    let body = json!([{"id": "a"}, {"name": "no id"}]);
    assert!(Record::from_list(body).is_err());
}

#[test]
fn test_resource_invalidation_sets() {
    // A mutation invalidates the resource itself plus its dependents.
    let mut touched = vec![Resource::Inventory];
    touched.extend_from_slice(Resource::Inventory.dependents());
    assert_eq!(touched, [Resource::Inventory, Resource::Products]);

    let mut touched = vec![Resource::Orders];
    touched.extend_from_slice(Resource::Orders.dependents());
    assert_eq!(
        touched,
        [Resource::Orders, Resource::Products, Resource::Inventory]
    );
}

#[test]
fn test_params_round_trip_into_cache_suffix() {
    let params = ListParams::new()
        .set("status", "new")
        .set("q", "سیب")
        .set("ignored", "");
    assert_eq!(params.canonical(), "q=سیب&status=new");

    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, [("q", "سیب"), ("status", "new")]);
}
