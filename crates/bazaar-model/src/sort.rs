//! Sortable-table state.
//!
//! A table owns one `SortState`; clicking a header runs [`SortState::request`]
//! and the view re-derives its row order through [`sort_records`], which is a
//! pure function of (records, column, kind, order).

use std::cmp::Ordering;

use chrono::DateTime;

use crate::collate;
use crate::record::Record;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// How a column's values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Persian-aware collation.
    Text,
    /// Missing or non-numeric values coerce to 0.
    Number,
    /// `true` sorts above `false`.
    Flag,
    /// RFC 3339 timestamps; unparseable values sort as the epoch.
    Date,
}

/// Active sort column and direction for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    order: SortOrder,
}

impl SortState {
    /// Handle a header click: the active column flips direction, a new
    /// column starts ascending.
    pub fn request(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.order = self.order.flipped();
        } else {
            self.column = Some(column.to_string());
            self.order = SortOrder::Ascending;
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Order `records` by the active column, or return them unchanged when
    /// no column is active.
    pub fn apply(&self, records: &[Record], kind_of: impl Fn(&str) -> ColumnKind) -> Vec<Record> {
        match self.column.as_deref() {
            None => records.to_vec(),
            Some(column) => sort_records(records, column, kind_of(column), self.order),
        }
    }
}

/// Produce a stably ordered copy of `records` by `column`.
///
/// Pure: identical inputs always yield identical output. The underlying
/// sort is `sort_by` on a `Vec`, which Rust guarantees stable, so equal
/// keys keep their incoming relative order.
pub fn sort_records(
    records: &[Record],
    column: &str,
    kind: ColumnKind,
    order: SortOrder,
) -> Vec<Record> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let cmp = compare_field(a, b, column, kind);
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    out
}

fn compare_field(a: &Record, b: &Record, column: &str, kind: ColumnKind) -> Ordering {
    match kind {
        ColumnKind::Text => collate::compare(&a.text(column), &b.text(column)),
        ColumnKind::Number => a
            .number(column)
            .partial_cmp(&b.number(column))
            .unwrap_or(Ordering::Equal),
        ColumnKind::Flag => b.flag(column).cmp(&a.flag(column)),
        ColumnKind::Date => timestamp(a, column).cmp(&timestamp(b, column)),
    }
}

fn timestamp(record: &Record, column: &str) -> i64 {
    DateTime::parse_from_rfc3339(&record.text(column))
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: serde_json::Value) -> Record {
        Record::from_value(value).unwrap()
    }

    fn names(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.text("name")).collect()
    }

    #[test]
    fn request_toggles_only_on_same_column() {
        let mut sort = SortState::default();
        sort.request("name");
        assert_eq!(sort.column(), Some("name"));
        assert_eq!(sort.order(), SortOrder::Ascending);

        sort.request("name");
        assert_eq!(sort.order(), SortOrder::Descending);

        // A different column resets to ascending.
        sort.request("price");
        assert_eq!(sort.column(), Some("price"));
        assert_eq!(sort.order(), SortOrder::Ascending);
    }

    #[test]
    fn numbers_coerce_missing_to_zero() {
        let rows = vec![
            record(json!({"id": "1", "name": "a", "price": 10})),
            record(json!({"id": "2", "name": "b"})),
            record(json!({"id": "3", "name": "c", "price": "5"})),
        ];
        let sorted = sort_records(&rows, "price", ColumnKind::Number, SortOrder::Ascending);
        assert_eq!(names(&sorted), ["b", "c", "a"]);
    }

    #[test]
    fn flags_sort_true_first() {
        let rows = vec![
            record(json!({"id": "1", "name": "off", "isActive": false})),
            record(json!({"id": "2", "name": "on", "isActive": true})),
        ];
        let sorted = sort_records(&rows, "isActive", ColumnKind::Flag, SortOrder::Ascending);
        assert_eq!(names(&sorted), ["on", "off"]);
    }

    #[test]
    fn dates_parse_rfc3339() {
        let rows = vec![
            record(json!({"id": "1", "name": "new", "createdAt": "2025-03-01T10:00:00Z"})),
            record(json!({"id": "2", "name": "old", "createdAt": "2024-01-01T10:00:00Z"})),
            record(json!({"id": "3", "name": "bad", "createdAt": "not a date"})),
        ];
        let sorted = sort_records(&rows, "createdAt", ColumnKind::Date, SortOrder::Ascending);
        assert_eq!(names(&sorted), ["bad", "old", "new"]);
    }

    #[test]
    fn equal_keys_keep_incoming_order() {
        let rows = vec![
            record(json!({"id": "1", "name": "x", "order": 1})),
            record(json!({"id": "2", "name": "y", "order": 1})),
            record(json!({"id": "3", "name": "z", "order": 0})),
        ];
        let sorted = sort_records(&rows, "order", ColumnKind::Number, SortOrder::Ascending);
        assert_eq!(names(&sorted), ["z", "x", "y"]);
    }
}
