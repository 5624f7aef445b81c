#![allow(missing_docs)]

use bazaar_model::{ColumnKind, Record, SortOrder, sort_records};
use proptest::prelude::*;
use serde_json::json;

fn record(id: usize, field: &str, value: serde_json::Value) -> Record {
    Record::from_value(json!({"id": id.to_string(), field: value})).expect("record")
}

proptest! {
    /// Sorting a distinct-valued column ascending then descending yields
    /// exactly the reversed order.
    #[test]
    fn ascending_is_reverse_of_descending(values in proptest::collection::hash_set(0i64..10_000, 1..40)) {
        let rows: Vec<Record> = values
            .iter()
            .enumerate()
            .map(|(i, v)| record(i, "price", json!(v)))
            .collect();

        let asc = sort_records(&rows, "price", ColumnKind::Number, SortOrder::Ascending);
        let mut desc = sort_records(&rows, "price", ColumnKind::Number, SortOrder::Descending);
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    /// Sorting is pure: the same input always produces the same output.
    #[test]
    fn sorting_is_deterministic(values in proptest::collection::vec(0i64..100, 0..40)) {
        let rows: Vec<Record> = values
            .iter()
            .enumerate()
            .map(|(i, v)| record(i, "stock", json!(v)))
            .collect();

        let first = sort_records(&rows, "stock", ColumnKind::Number, SortOrder::Ascending);
        let second = sort_records(&rows, "stock", ColumnKind::Number, SortOrder::Ascending);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_persian_names_sort_in_dictionary_order() {
    let rows = vec![
        record(0, "name", json!("موز")),
        record(1, "name", json!("سیب")),
        record(2, "name", json!("پرتقال")),
        record(3, "name", json!("باران")),
    ];
    let sorted = sort_records(&rows, "name", ColumnKind::Text, SortOrder::Ascending);
    let names: Vec<_> = sorted.iter().map(|r| r.text("name")).collect();
    assert_eq!(names, ["باران", "پرتقال", "سیب", "موز"]);
}
