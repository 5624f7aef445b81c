//! The keyed store.

use std::collections::HashMap;

use bazaar_model::{Record, Resource};
use tracing::{debug, trace};

use crate::key::{FetchTicket, QueryKey};

/// Lifecycle state of one cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What a reader should do next for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadPlan {
    /// Cached data is fresh; render it.
    Fresh,
    /// Run the fetcher and hand the result to [`QueryCache::complete`]
    /// together with this ticket.
    Fetch(FetchTicket),
    /// A fetch for this key is already in flight; wait for it.
    Pending,
}

/// Result of handing a fetch outcome back to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result was stored.
    Applied,
    /// The ticket was superseded by an invalidation; the result was
    /// discarded.
    Stale,
}

#[derive(Debug, Default)]
struct Entry {
    status: QueryStatus,
    records: Option<Vec<Record>>,
    error: Option<String>,
    stale: bool,
    generation: u64,
    /// Generation of the outstanding fetch, if one is in flight.
    in_flight: Option<u64>,
    /// Refcount of mounted consumers.
    mounts: usize,
}

/// Process-wide keyed query store.
///
/// Populated on first read per key, invalidated by dependent mutations,
/// cleared wholesale on logout.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Decide what a reader of `key` must do.
    ///
    /// At most one fetch per key is in flight at a time: while a ticket is
    /// outstanding, further readers get [`ReadPlan::Pending`].
    pub fn plan_read(&mut self, key: &QueryKey) -> ReadPlan {
        let entry = self.entries.entry(key.clone()).or_default();

        if entry.in_flight.is_some() {
            trace!(key = %key, "read deduplicated");
            return ReadPlan::Pending;
        }
        if entry.status == QueryStatus::Success && !entry.stale {
            return ReadPlan::Fresh;
        }

        // Idle, errored, or stale: start a fetch. Existing data stays
        // visible while the refetch runs in the background.
        entry.in_flight = Some(entry.generation);
        if entry.records.is_none() {
            entry.status = QueryStatus::Loading;
        }
        debug!(key = %key, generation = entry.generation, "fetch started");
        ReadPlan::Fetch(FetchTicket {
            key: key.clone(),
            generation: entry.generation,
        })
    }

    /// Store a fetch outcome.
    ///
    /// A ticket whose generation no longer matches the entry was superseded
    /// by an invalidation; its result is discarded so a stale response never
    /// overwrites a fresher state (last-invalidation-wins).
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Record>, String>,
    ) -> Outcome {
        let entry = self.entries.entry(ticket.key.clone()).or_default();

        if entry.in_flight != Some(ticket.generation) {
            debug!(key = %ticket.key, generation = ticket.generation, "stale result discarded");
            return Outcome::Stale;
        }
        entry.in_flight = None;

        match result {
            Ok(records) => {
                debug!(key = %ticket.key, count = records.len(), "fetch succeeded");
                entry.records = Some(records);
                entry.status = QueryStatus::Success;
                entry.stale = false;
                entry.error = None;
            }
            Err(message) => {
                debug!(key = %ticket.key, error = %message, "fetch failed");
                // Prior data, if any, stays visible alongside the error.
                entry.status = QueryStatus::Error;
                entry.error = Some(message);
            }
        }
        Outcome::Applied
    }

    // -------------------------------------------------------------------------
    // Invalidation
    // -------------------------------------------------------------------------

    /// Mark every key of `resource` (and its declared dependents) stale.
    ///
    /// Call only after a mutation *succeeds*; a failed mutation leaves the
    /// cache untouched. Returns the mounted keys that should refetch
    /// immediately; unmounted keys refetch lazily on their next read.
    pub fn invalidate_after(&mut self, resource: Resource) -> Vec<QueryKey> {
        let mut resources = vec![resource];
        resources.extend_from_slice(resource.dependents());
        self.invalidate(&resources)
    }

    /// Mark every key of the given resources stale.
    pub fn invalidate(&mut self, resources: &[Resource]) -> Vec<QueryKey> {
        let mut refetch = Vec::new();
        for (key, entry) in &mut self.entries {
            if !resources.contains(&key.resource()) {
                continue;
            }
            entry.stale = true;
            entry.generation += 1;
            entry.in_flight = None;
            debug!(key = %key, generation = entry.generation, "invalidated");
            if entry.mounts > 0 {
                refetch.push(key.clone());
            }
        }
        refetch.sort_by_key(std::string::ToString::to_string);
        refetch
    }

    /// Drop everything (logout).
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "cache cleared");
        self.entries.clear();
    }

    // -------------------------------------------------------------------------
    // Mounts
    // -------------------------------------------------------------------------

    /// Register a consumer of `key`. Mounted keys refetch eagerly on
    /// invalidation.
    pub fn mount(&mut self, key: &QueryKey) {
        self.entries.entry(key.clone()).or_default().mounts += 1;
    }

    /// Unregister a consumer. Cached data survives unmounting; only the
    /// eager-refetch behavior stops.
    pub fn unmount(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.mounts = entry.mounts.saturating_sub(1);
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn records(&self, key: &QueryKey) -> Option<&[Record]> {
        self.entries
            .get(key)
            .and_then(|e| e.records.as_deref())
    }

    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        self.entries.get(key).map(|e| e.status).unwrap_or_default()
    }

    pub fn error(&self, key: &QueryKey) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.error.as_deref())
    }

    /// Whether a reader should show a spinner: first load in progress.
    pub fn is_loading(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| e.status == QueryStatus::Loading)
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|e| e.stale)
    }
}
