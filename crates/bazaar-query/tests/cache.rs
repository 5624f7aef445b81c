#![allow(missing_docs)]

use bazaar_model::{ListParams, Record, Resource};
use bazaar_query::{Outcome, QueryCache, QueryKey, QueryStatus, ReadPlan};
use serde_json::json;

fn records(values: &[(&str, &str)]) -> Vec<Record> {
    values
        .iter()
        .map(|(id, name)| Record::from_value(json!({"id": id, "name": name})).unwrap())
        .collect()
}

fn fetch_ticket(cache: &mut QueryCache, key: &QueryKey) -> bazaar_query::FetchTicket {
    match cache.plan_read(key) {
        ReadPlan::Fetch(ticket) => ticket,
        other => panic!("expected a fetch plan, got {other:?}"),
    }
}

#[test]
fn test_first_read_fetches_then_caches() {
    let mut cache = QueryCache::new();
    let key = QueryKey::bare(Resource::Products);

    let ticket = fetch_ticket(&mut cache, &key);
    assert_eq!(cache.status(&key), QueryStatus::Loading);

    let outcome = cache.complete(&ticket, Ok(records(&[("1", "Apple")])));
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(cache.status(&key), QueryStatus::Success);
    assert_eq!(cache.records(&key).unwrap().len(), 1);

    // The next read is served from cache.
    assert_eq!(cache.plan_read(&key), ReadPlan::Fresh);
}

#[test]
fn test_concurrent_reads_share_one_fetch() {
    let mut cache = QueryCache::new();
    let key = QueryKey::bare(Resource::Orders);

    let _ticket = fetch_ticket(&mut cache, &key);
    assert_eq!(cache.plan_read(&key), ReadPlan::Pending);
    assert_eq!(cache.plan_read(&key), ReadPlan::Pending);
}

#[test]
fn test_distinct_params_are_distinct_keys() {
    let mut cache = QueryCache::new();
    let all = QueryKey::bare(Resource::Contact);
    let filtered = QueryKey::new(
        Resource::Contact,
        &ListParams::new().set("status", "new"),
    );

    let t1 = fetch_ticket(&mut cache, &all);
    // A different filter does not dedupe against the unfiltered fetch.
    let t2 = fetch_ticket(&mut cache, &filtered);

    cache.complete(&t1, Ok(records(&[("1", "a"), ("2", "b")])));
    cache.complete(&t2, Ok(records(&[("1", "a")])));
    assert_eq!(cache.records(&all).unwrap().len(), 2);
    assert_eq!(cache.records(&filtered).unwrap().len(), 1);
}

#[test]
fn test_invalidation_discards_in_flight_result() {
    let mut cache = QueryCache::new();
    let key = QueryKey::bare(Resource::Products);

    let ticket = fetch_ticket(&mut cache, &key);
    cache.complete(&ticket, Ok(records(&[("1", "Apple")])));

    // Refetch starts, then an invalidation supersedes it mid-flight.
    cache.invalidate(&[Resource::Products]);
    let superseded = fetch_ticket(&mut cache, &key);
    cache.invalidate(&[Resource::Products]);

    let outcome = cache.complete(&superseded, Ok(records(&[("9", "stale payload")])));
    assert_eq!(outcome, Outcome::Stale);
    // The stale payload never landed.
    let names: Vec<_> = cache.records(&key).unwrap().iter().map(|r| r.text("name")).collect();
    assert_eq!(names, ["Apple"]);
    assert!(cache.is_stale(&key));
}

#[test]
fn test_mutation_invalidates_resource_and_dependents() {
    let mut cache = QueryCache::new();
    let inventory = QueryKey::bare(Resource::Inventory);
    let products = QueryKey::bare(Resource::Products);
    let categories = QueryKey::bare(Resource::Categories);

    for key in [&inventory, &products, &categories] {
        let t = fetch_ticket(&mut cache, key);
        cache.complete(&t, Ok(records(&[("1", "x")])));
        cache.mount(key);
    }

    // A successful inventory adjustment invalidates inventory AND products.
    let refetch = cache.invalidate_after(Resource::Inventory);
    assert!(refetch.contains(&inventory));
    assert!(refetch.contains(&products));
    assert!(!refetch.contains(&categories));
    assert!(cache.is_stale(&inventory));
    assert!(cache.is_stale(&products));
    assert!(!cache.is_stale(&categories));

    // A failed mutation never calls invalidate: nothing else goes stale.
}

#[test]
fn test_unmounted_keys_refetch_lazily() {
    let mut cache = QueryCache::new();
    let key = QueryKey::bare(Resource::Brands);

    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Ok(records(&[("1", "x")])));
    cache.mount(&key);
    cache.unmount(&key);

    // Not mounted: invalidation returns no eager-refetch work ...
    let refetch = cache.invalidate_after(Resource::Brands);
    assert!(refetch.is_empty());

    // ... but the next reader still refetches.
    assert!(matches!(cache.plan_read(&key), ReadPlan::Fetch(_)));
    // Old data stays visible during the background refetch.
    assert_eq!(cache.status(&key), QueryStatus::Success);
    assert!(cache.records(&key).is_some());
}

#[test]
fn test_fetch_failure_keeps_prior_data() {
    let mut cache = QueryCache::new();
    let key = QueryKey::bare(Resource::Deals);

    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Ok(records(&[("1", "Nowruz sale")])));

    cache.invalidate(&[Resource::Deals]);
    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Err("server error (500): boom".to_string()));

    assert_eq!(cache.status(&key), QueryStatus::Error);
    assert_eq!(cache.error(&key), Some("server error (500): boom"));
    // The last good list is still there for the view.
    assert_eq!(cache.records(&key).unwrap().len(), 1);
}

#[test]
fn test_clear_wipes_everything() {
    let mut cache = QueryCache::new();
    let key = QueryKey::bare(Resource::Users);
    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Ok(records(&[("1", "admin")])));

    cache.clear();
    assert_eq!(cache.status(&key), QueryStatus::Idle);
    assert!(cache.records(&key).is_none());
}

/// End-to-end flow against a simulated backend: create a category, see it in
/// the refetched list, edit it, see the edit, delete it, see it gone.
#[test]
fn test_category_crud_round_trip() {
    let mut backend: Vec<(String, String, i64)> = Vec::new();
    let mut cache = QueryCache::new();
    let key = QueryKey::bare(Resource::Categories);
    cache.mount(&key);

    let snapshot = |backend: &Vec<(String, String, i64)>| -> Vec<Record> {
        backend
            .iter()
            .map(|(id, name, order)| {
                Record::from_value(json!({"id": id, "name": name, "order": order})).unwrap()
            })
            .collect()
    };

    // Initial read: empty list.
    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Ok(snapshot(&backend)));
    assert!(cache.records(&key).unwrap().is_empty());

    // Create succeeds server-side; only then do we invalidate.
    backend.push(("c1".to_string(), "Fruits".to_string(), 1));
    let refetch = cache.invalidate_after(Resource::Categories);
    assert_eq!(refetch, vec![key.clone()]);
    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Ok(snapshot(&backend)));
    let listed = cache.records(&key).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].text("name"), "Fruits");
    assert_eq!(listed[0].number("order"), 1.0);

    // Edit the ordering.
    backend[0].2 = 2;
    cache.invalidate_after(Resource::Categories);
    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Ok(snapshot(&backend)));
    assert_eq!(cache.records(&key).unwrap()[0].number("order"), 2.0);

    // Delete.
    backend.clear();
    cache.invalidate_after(Resource::Categories);
    let t = fetch_ticket(&mut cache, &key);
    cache.complete(&t, Ok(snapshot(&backend)));
    assert!(cache.records(&key).unwrap().is_empty());
}
