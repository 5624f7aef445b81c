//! List filter parameters with a canonical serialization.
//!
//! The same parameter set must hash to the same cache key regardless of the
//! order the caller inserted pairs in, so storage is a `BTreeMap`.

use std::collections::BTreeMap;
use std::fmt;

/// Ordered key/value filter parameters for a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListParams(BTreeMap<String, String>);

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter. Empty values are treated as "not filtered" and
    /// skipped, matching the backend's `undefined` convention.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(key.into(), value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical `k=v&k=v` form used as the cache-key suffix.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ListParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_insertion_independent() {
        let a = ListParams::new().set("status", "new").set("q", "apple");
        let b = ListParams::new().set("q", "apple").set("status", "new");
        assert_eq!(a.canonical(), b.canonical());
        assert_eq!(a.canonical(), "q=apple&status=new");
    }

    #[test]
    fn empty_values_are_skipped() {
        let p = ListParams::new().set("status", "");
        assert!(p.is_empty());
        assert_eq!(p.canonical(), "");
    }
}
