//! Fetch completion handling.
//!
//! Hands results back to the cache, which decides whether they still apply.
//! Stale results (superseded by an invalidation or a changed filter) are
//! discarded silently; they are a race, not an error.

use std::sync::Arc;

use iced::Task;

use bazaar_api::ApiClient;
use bazaar_model::Record;
use bazaar_query::{FetchTicket, Outcome};

use crate::handler::MessageHandler;
use crate::message::Message;
use crate::state::AppState;

/// One finished list fetch.
pub struct FetchDone {
    pub ticket: FetchTicket,
    pub result: Result<Vec<Record>, String>,
}

/// Handler for [`FetchDone`].
pub struct QueryHandler;

impl MessageHandler<FetchDone> for QueryHandler {
    fn handle(
        &self,
        state: &mut AppState,
        msg: FetchDone,
        _api: &Arc<ApiClient>,
    ) -> Task<Message> {
        let outcome = state.cache.complete(&msg.ticket, msg.result);
        if outcome == Outcome::Stale {
            tracing::debug!(key = %msg.ticket.key(), "late fetch result discarded");
        }
        Task::none()
    }
}
