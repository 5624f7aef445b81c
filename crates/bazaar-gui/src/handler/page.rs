//! Table/list message handling for resource screens.
//!
//! Covers the shared machinery (sorting, dialog opening, delete
//! confirmation) and the screen-specific extras: inline inventory edits,
//! order status changes, the contact inbox, and user notifications.

use std::sync::Arc;

use iced::Task;

use bazaar_api::ApiClient;
use bazaar_model::{ListParams, Record, RecordId, Resource};

use crate::handler::{MessageHandler, read_key};
use crate::message::{Message, PageMessage};
use crate::service;
use crate::state::{
    AppState, ConfirmDelete, DraftForm, InventoryEdit, NotifyDraft, PageExtra, ReplyDraft,
    ToastKind,
};

/// Handler for [`PageMessage`]s, keyed by resource.
pub struct PageHandler;

impl MessageHandler<(Resource, PageMessage)> for PageHandler {
    fn handle(
        &self,
        state: &mut AppState,
        (resource, msg): (Resource, PageMessage),
        api: &Arc<ApiClient>,
    ) -> Task<Message> {
        match msg {
            PageMessage::SortRequested(column) => {
                state.page_mut(resource).sort.request(column);
                Task::none()
            }

            PageMessage::NewClicked => {
                state.page_mut(resource).dialog = Some(DraftForm::create(resource));
                Task::none()
            }

            PageMessage::EditClicked(id) => {
                let Some(record) = find_record(state, resource, &id) else {
                    return Task::none();
                };
                state.page_mut(resource).dialog = Some(DraftForm::edit(resource, &record));
                Task::none()
            }

            PageMessage::DeleteRequested { id, label } => {
                state.page_mut(resource).confirm = Some(ConfirmDelete {
                    id,
                    label,
                    restock: false,
                });
                Task::none()
            }

            PageMessage::CancelDelete => {
                state.page_mut(resource).confirm = None;
                Task::none()
            }

            PageMessage::RestockToggled(restock) => {
                if let Some(confirm) = &mut state.page_mut(resource).confirm {
                    confirm.restock = restock;
                }
                Task::none()
            }

            PageMessage::ConfirmDelete => {
                let page = state.page_mut(resource);
                let Some(confirm) = page.confirm.clone() else {
                    return Task::none();
                };
                page.busy = true;
                let params = if resource == Resource::Orders && confirm.restock {
                    ListParams::new().set("restock", "true")
                } else {
                    ListParams::new()
                };
                service::remove(api.clone(), resource, confirm.id, params)
            }

            // -----------------------------------------------------------------
            // Inventory
            // -----------------------------------------------------------------
            PageMessage::QuantityChanged(id, quantity) => {
                inventory_edit(state, &id).quantity = quantity;
                Task::none()
            }

            PageMessage::OperationChanged(id, op) => {
                inventory_edit(state, &id).op = op;
                Task::none()
            }

            PageMessage::AdjustSubmitted(id) => {
                let edit = inventory_edit(state, &id).clone();
                let Ok(quantity) = edit.quantity.trim().parse::<i64>() else {
                    state
                        .toast
                        .show("Enter a quantity first", ToastKind::Warning);
                    return Task::none();
                };
                state.page_mut(Resource::Inventory).busy = true;
                service::adjust_inventory(api.clone(), id, quantity, edit.op)
            }

            // -----------------------------------------------------------------
            // Orders
            // -----------------------------------------------------------------
            PageMessage::StatusPicked(id, status) => {
                state.page_mut(Resource::Orders).busy = true;
                service::update_order_status(api.clone(), id, status)
            }

            PageMessage::StatusesLoaded(result) => {
                match result {
                    Ok(list) => {
                        if let PageExtra::Orders { statuses } =
                            &mut state.page_mut(Resource::Orders).extra
                        {
                            *statuses = list;
                        }
                    }
                    Err(message) => state.toast.show(message, ToastKind::Error),
                }
                Task::none()
            }

            // -----------------------------------------------------------------
            // Contact inbox
            // -----------------------------------------------------------------
            PageMessage::FilterStatusPicked(status) => {
                let old_key = state.page_mut(Resource::Contact).query_key();
                if let PageExtra::Contact { status_filter, .. } =
                    &mut state.page_mut(Resource::Contact).extra
                {
                    *status_filter = if status == "all" { String::new() } else { status };
                }
                remount(state, api, old_key)
            }

            PageMessage::SearchChanged(input) => {
                if let PageExtra::Contact { search_input, .. } =
                    &mut state.page_mut(Resource::Contact).extra
                {
                    *search_input = input;
                }
                Task::none()
            }

            PageMessage::SearchSubmitted => {
                let old_key = state.page_mut(Resource::Contact).query_key();
                if let PageExtra::Contact {
                    search_input,
                    search_applied,
                    ..
                } = &mut state.page_mut(Resource::Contact).extra
                {
                    *search_applied = search_input.trim().to_string();
                }
                remount(state, api, old_key)
            }

            PageMessage::ViewClicked(id) => {
                let Some(record) = find_record(state, Resource::Contact, &id) else {
                    return Task::none();
                };
                let is_new = record.text("status") == "new";
                if let PageExtra::Contact { viewing, .. } =
                    &mut state.page_mut(Resource::Contact).extra
                {
                    *viewing = Some(record);
                }
                if is_new {
                    // Opening an unread message marks it read.
                    service::update_contact_status(api.clone(), id, "read".to_string(), None)
                } else {
                    Task::none()
                }
            }

            PageMessage::ViewClosed => {
                if let PageExtra::Contact { viewing, .. } =
                    &mut state.page_mut(Resource::Contact).extra
                {
                    *viewing = None;
                }
                Task::none()
            }

            PageMessage::ReplyClicked(id) => {
                if let PageExtra::Contact { reply, .. } =
                    &mut state.page_mut(Resource::Contact).extra
                {
                    *reply = Some(ReplyDraft {
                        id,
                        message: String::new(),
                    });
                }
                Task::none()
            }

            PageMessage::ReplyChanged(message) => {
                if let PageExtra::Contact {
                    reply: Some(draft), ..
                } = &mut state.page_mut(Resource::Contact).extra
                {
                    draft.message = message;
                }
                Task::none()
            }

            PageMessage::ReplyCancelled => {
                if let PageExtra::Contact { reply, .. } =
                    &mut state.page_mut(Resource::Contact).extra
                {
                    *reply = None;
                }
                Task::none()
            }

            PageMessage::ReplySubmitted => {
                let Some(draft) = contact_reply(state) else {
                    return Task::none();
                };
                if draft.message.trim().is_empty() {
                    state
                        .toast
                        .show("Write a reply message first", ToastKind::Warning);
                    return Task::none();
                }
                state.page_mut(Resource::Contact).busy = true;
                service::update_contact_status(
                    api.clone(),
                    draft.id,
                    "replied".to_string(),
                    Some(draft.message.trim().to_string()),
                )
            }

            // -----------------------------------------------------------------
            // User notifications
            // -----------------------------------------------------------------
            PageMessage::NotifyClicked(id) => {
                if let PageExtra::Users { notify } = &mut state.page_mut(Resource::Users).extra {
                    *notify = Some(NotifyDraft {
                        id,
                        title: String::new(),
                        body: String::new(),
                    });
                }
                Task::none()
            }

            PageMessage::NotifyTitleChanged(title) => {
                if let PageExtra::Users {
                    notify: Some(draft),
                } = &mut state.page_mut(Resource::Users).extra
                {
                    draft.title = title;
                }
                Task::none()
            }

            PageMessage::NotifyBodyChanged(body) => {
                if let PageExtra::Users {
                    notify: Some(draft),
                } = &mut state.page_mut(Resource::Users).extra
                {
                    draft.body = body;
                }
                Task::none()
            }

            PageMessage::NotifyCancelled => {
                if let PageExtra::Users { notify } = &mut state.page_mut(Resource::Users).extra {
                    *notify = None;
                }
                Task::none()
            }

            PageMessage::NotifySubmitted => {
                let Some(draft) = user_notify(state) else {
                    return Task::none();
                };
                if draft.title.trim().is_empty() {
                    state
                        .toast
                        .show("A notification needs a title", ToastKind::Warning);
                    return Task::none();
                }
                state.page_mut(Resource::Users).busy = true;
                service::send_notification(
                    api.clone(),
                    draft.id,
                    draft.title.trim().to_string(),
                    draft.body.trim().to_string(),
                )
            }
        }
    }
}

/// Look a record up in the page's current cached list.
fn find_record(state: &mut AppState, resource: Resource, id: &RecordId) -> Option<Record> {
    let key = state.page_mut(resource).query_key();
    state
        .cache
        .records(&key)?
        .iter()
        .find(|r| r.id() == id)
        .cloned()
}

fn inventory_edit<'a>(state: &'a mut AppState, id: &RecordId) -> &'a mut InventoryEdit {
    match &mut state.page_mut(Resource::Inventory).extra {
        PageExtra::Inventory { edits } => edits.entry(id.clone()).or_default(),
        _ => unreachable!("inventory page always has inventory extras"),
    }
}

fn contact_reply(state: &mut AppState) -> Option<ReplyDraft> {
    match &state.page_mut(Resource::Contact).extra {
        PageExtra::Contact { reply, .. } => reply.clone(),
        _ => None,
    }
}

fn user_notify(state: &mut AppState) -> Option<NotifyDraft> {
    match &state.page_mut(Resource::Users).extra {
        PageExtra::Users { notify } => notify.clone(),
        _ => None,
    }
}

/// A contact filter changed: swap the mounted key and read the new one.
fn remount(state: &mut AppState, api: &Arc<ApiClient>, old_key: bazaar_query::QueryKey) -> Task<Message> {
    let new_key = state.page_mut(Resource::Contact).query_key();
    if new_key == old_key {
        return Task::none();
    }
    state.cache.unmount(&old_key);
    state.cache.mount(&new_key);
    read_key(state, api, &new_key)
}
