//! Mutation completion handling.
//!
//! The one place the mutation contract is enforced: invalidation and UI
//! teardown happen only on success; a failure shows the server's message
//! and leaves the prior state (open dialog included) untouched.

use std::sync::Arc;

use iced::Task;

use bazaar_api::ApiClient;
use bazaar_model::Resource;

use crate::handler::{MessageHandler, read_key};
use crate::message::{Message, MutationKind};
use crate::resource::spec;
use crate::state::{AppState, PageExtra, ToastKind};

/// Outcome of one finished mutation.
pub struct MutationDone {
    pub resource: Resource,
    pub kind: MutationKind,
    pub result: Result<(), String>,
}

/// Handler for [`MutationDone`].
pub struct MutationHandler;

impl MessageHandler<MutationDone> for MutationHandler {
    fn handle(
        &self,
        state: &mut AppState,
        msg: MutationDone,
        api: &Arc<ApiClient>,
    ) -> Task<Message> {
        let MutationDone {
            resource,
            kind,
            result,
        } = msg;
        state.page_mut(resource).busy = false;

        if let Err(message) = result {
            tracing::warn!(resource = %resource, ?kind, error = %message, "mutation failed");
            state.toast.show(message, ToastKind::Error);
            return Task::none();
        }

        tracing::info!(resource = %resource, ?kind, "mutation succeeded");
        state.toast.show(success_label(resource, kind), ToastKind::Success);
        close_for(state, resource, kind);

        if !kind.invalidates() {
            return Task::none();
        }

        // Invalidate the resource and its dependents; refetch whatever is
        // mounted right now, everything else refetches lazily.
        let keys = state.cache.invalidate_after(resource);
        let tasks: Vec<_> = keys
            .iter()
            .map(|key| read_key(state, api, key))
            .collect();
        Task::batch(tasks)
    }
}

/// Toast text for a successful mutation.
fn success_label(resource: Resource, kind: MutationKind) -> String {
    let singular = spec(resource).singular;
    match kind {
        MutationKind::Create => format!("{singular} created"),
        MutationKind::Update => format!("{singular} updated"),
        MutationKind::Delete => format!("{singular} deleted"),
        MutationKind::Adjust => "Inventory updated".to_string(),
        MutationKind::Status => match resource {
            Resource::Orders => "Order status updated".to_string(),
            _ => "Message status updated".to_string(),
        },
        MutationKind::Reply => "Reply sent".to_string(),
        MutationKind::Notify => "Notification sent".to_string(),
    }
}

/// Tear down whatever UI drove the mutation.
fn close_for(state: &mut AppState, resource: Resource, kind: MutationKind) {
    match kind {
        MutationKind::Create | MutationKind::Update => {
            let page = state.pages.get_mut(&resource);
            if let Some(draft) = page.and_then(|p| p.dialog.take()) {
                draft.discard(&mut state.previews);
            }
        }
        MutationKind::Delete => {
            state.page_mut(resource).confirm = None;
        }
        MutationKind::Adjust => {
            if let PageExtra::Inventory { edits } = &mut state.page_mut(Resource::Inventory).extra {
                edits.clear();
            }
        }
        MutationKind::Reply => {
            if let PageExtra::Contact { reply, .. } = &mut state.page_mut(Resource::Contact).extra {
                *reply = None;
            }
        }
        MutationKind::Status | MutationKind::Notify => {
            if let PageExtra::Users { notify } = &mut state.page_mut(Resource::Users).extra
                && kind == MutationKind::Notify
            {
                *notify = None;
            }
        }
    }
}
