//! Create/edit dialog message handling.
//!
//! The dialog state machine: `closed -> open(draft) -> editing ->
//! (submit -> closed on success | cancel -> closed)`. Local validation runs
//! before any network call; a server rejection leaves the draft intact.

use std::sync::Arc;

use iced::Task;

use bazaar_api::ApiClient;
use bazaar_model::Resource;

use crate::handler::MessageHandler;
use crate::message::{DialogMessage, Message};
use crate::service;
use crate::state::{AppState, ToastKind};

/// Handler for [`DialogMessage`]s, keyed by resource.
pub struct DialogHandler;

impl MessageHandler<(Resource, DialogMessage)> for DialogHandler {
    fn handle(
        &self,
        state: &mut AppState,
        (resource, msg): (Resource, DialogMessage),
        api: &Arc<ApiClient>,
    ) -> Task<Message> {
        match msg {
            DialogMessage::FieldChanged(field, value) => {
                if let Some(draft) = &mut state.page_mut(resource).dialog {
                    draft.set_text(field, value);
                }
                Task::none()
            }

            DialogMessage::FlagToggled(field, value) => {
                if let Some(draft) = &mut state.page_mut(resource).dialog {
                    draft.set_flag(field, value);
                }
                Task::none()
            }

            DialogMessage::SelectPicked(field, value) => {
                if let Some(draft) = &mut state.page_mut(resource).dialog {
                    draft.set_text(field, value);
                }
                Task::none()
            }

            DialogMessage::PickFile(field) => service::pick_image(resource, field),

            DialogMessage::FilePicked(field, picked) => {
                let Some(file) = picked else {
                    // Picker cancelled.
                    return Task::none();
                };
                let page = state.pages.get_mut(&resource);
                if let Some(draft) = page.and_then(|p| p.dialog.as_mut()) {
                    draft.attach_file(field, file, &mut state.previews);
                }
                Task::none()
            }

            DialogMessage::ClearFile(field) => {
                let page = state.pages.get_mut(&resource);
                if let Some(draft) = page.and_then(|p| p.dialog.as_mut()) {
                    draft.clear_file(field, &mut state.previews);
                }
                Task::none()
            }

            DialogMessage::UrlChanged(field, url) => {
                let page = state.pages.get_mut(&resource);
                if let Some(draft) = page.and_then(|p| p.dialog.as_mut()) {
                    draft.set_file_url(field, url, &mut state.previews);
                }
                Task::none()
            }

            DialogMessage::Cancel => {
                let page = state.pages.get_mut(&resource);
                if let Some(draft) = page.and_then(|p| p.dialog.take()) {
                    draft.discard(&mut state.previews);
                }
                Task::none()
            }

            DialogMessage::Submit => {
                let Some(draft) = state.page_mut(resource).dialog.as_ref() else {
                    return Task::none();
                };

                // Validation failures never reach the network.
                if let Some(label) = draft.missing_required() {
                    state
                        .toast
                        .show(format!("{label} is required"), ToastKind::Warning);
                    return Task::none();
                }

                let editing = draft.editing.clone();
                let (payload, files) = draft.payload();
                state.page_mut(resource).busy = true;

                match editing {
                    Some(id) => service::update(api.clone(), resource, id, payload, files),
                    None => service::create(api.clone(), resource, payload, files),
                }
            }
        }
    }
}
