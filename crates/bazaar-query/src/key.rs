//! Cache keys and fetch tickets.

use std::fmt;

use bazaar_model::{ListParams, Resource};

/// Identifies one cached list: the resource plus the canonical filter
/// parameters it was fetched with. Carrying the parameters (rather than
/// only their serialization) lets an invalidated key be refetched directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: Resource,
    params: ListParams,
}

impl QueryKey {
    pub fn new(resource: Resource, params: &ListParams) -> Self {
        Self {
            resource,
            params: params.clone(),
        }
    }

    /// Key for an unfiltered list.
    pub fn bare(resource: Resource) -> Self {
        Self {
            resource,
            params: ListParams::new(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn params(&self) -> &ListParams {
        &self.params
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}?{}", self.resource, self.params)
        }
    }
}

/// Proof that a caller was told to fetch a key, carrying the generation the
/// entry had at issue time. [`crate::QueryCache::complete`] discards results
/// whose ticket generation has been superseded by an invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub(crate) key: QueryKey,
    pub(crate) generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}
