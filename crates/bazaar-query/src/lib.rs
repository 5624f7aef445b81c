//! The query cache layer.
//!
//! A process-wide keyed store for backend list data. Each key runs the
//! machine `Idle -> Loading -> (Success | Error)` with a staleness flag on
//! top: mutations invalidate their resource's keys (and declared
//! dependents), which bumps a per-key generation so a late in-flight
//! response can never overwrite a fresher invalidation.
//!
//! The cache never performs I/O. Callers ask it to [`QueryCache::plan_read`],
//! run the fetch themselves when told to, and hand the outcome back through
//! [`QueryCache::complete`] with the ticket they were issued. This keeps the
//! whole layer synchronous and exhaustively testable.

pub mod cache;
pub mod key;

pub use cache::{Outcome, QueryCache, QueryStatus, ReadPlan};
pub use key::{FetchTicket, QueryKey};
