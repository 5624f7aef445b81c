//! Background tasks.
//!
//! Every network call runs through `Task::perform`: an async future plus a
//! mapping from its output to a [`Message`]. Nothing here touches state;
//! results come back through `App::update`.

use std::sync::Arc;

use iced::Task;
use serde_json::{Map, Value};

use bazaar_api::{ApiClient, InventoryOp};
use bazaar_model::{ListParams, RecordId, Resource};
use bazaar_query::FetchTicket;

use crate::message::{Message, MutationKind, PageMessage, PickedFile, SessionMessage};

// =============================================================================
// QUERIES
// =============================================================================

/// Run the list fetch a [`FetchTicket`] was issued for.
pub fn fetch_list(api: Arc<ApiClient>, ticket: FetchTicket) -> Task<Message> {
    Task::perform(
        async move {
            let resource = ticket.key().resource();
            let params = ticket.key().params().clone();
            let result = api
                .list(resource, &params)
                .await
                .map_err(|e| e.user_message());
            (ticket, result)
        },
        |(ticket, result)| Message::FetchDone { ticket, result },
    )
}

/// Fetch the order status vocabulary for the orders screen.
pub fn fetch_order_statuses(api: Arc<ApiClient>) -> Task<Message> {
    Task::perform(
        async move { api.order_statuses().await.map_err(|e| e.user_message()) },
        |result| Message::Page(Resource::Orders, PageMessage::StatusesLoaded(result)),
    )
}

// =============================================================================
// MUTATIONS
// =============================================================================

fn done(resource: Resource, kind: MutationKind) -> impl Fn(Result<(), String>) -> Message {
    move |result| Message::MutationDone {
        resource,
        kind,
        result,
    }
}

pub fn create(
    api: Arc<ApiClient>,
    resource: Resource,
    payload: Map<String, Value>,
    files: Vec<bazaar_api::FilePart>,
) -> Task<Message> {
    Task::perform(
        async move {
            api.create(resource, payload, files)
                .await
                .map(|_| ())
                .map_err(|e| e.user_message())
        },
        done(resource, MutationKind::Create),
    )
}

pub fn update(
    api: Arc<ApiClient>,
    resource: Resource,
    id: RecordId,
    payload: Map<String, Value>,
    files: Vec<bazaar_api::FilePart>,
) -> Task<Message> {
    Task::perform(
        async move {
            api.update(resource, &id, payload, files)
                .await
                .map(|_| ())
                .map_err(|e| e.user_message())
        },
        done(resource, MutationKind::Update),
    )
}

pub fn remove(
    api: Arc<ApiClient>,
    resource: Resource,
    id: RecordId,
    params: ListParams,
) -> Task<Message> {
    Task::perform(
        async move {
            api.remove(resource, &id, &params)
                .await
                .map_err(|e| e.user_message())
        },
        done(resource, MutationKind::Delete),
    )
}

pub fn adjust_inventory(
    api: Arc<ApiClient>,
    product_id: RecordId,
    quantity: i64,
    op: InventoryOp,
) -> Task<Message> {
    Task::perform(
        async move {
            api.adjust_inventory(&product_id, quantity, op)
                .await
                .map(|_| ())
                .map_err(|e| e.user_message())
        },
        done(Resource::Inventory, MutationKind::Adjust),
    )
}

pub fn update_order_status(api: Arc<ApiClient>, id: RecordId, status: String) -> Task<Message> {
    Task::perform(
        async move {
            api.update_order_status(&id, &status)
                .await
                .map(|_| ())
                .map_err(|e| e.user_message())
        },
        done(Resource::Orders, MutationKind::Status),
    )
}

pub fn update_contact_status(
    api: Arc<ApiClient>,
    id: RecordId,
    status: String,
    reply: Option<String>,
) -> Task<Message> {
    let kind = if reply.is_some() {
        MutationKind::Reply
    } else {
        MutationKind::Status
    };
    Task::perform(
        async move {
            api.update_contact_status(&id, &status, reply.as_deref())
                .await
                .map(|_| ())
                .map_err(|e| e.user_message())
        },
        done(Resource::Contact, kind),
    )
}

pub fn send_notification(
    api: Arc<ApiClient>,
    user_id: RecordId,
    title: String,
    body: String,
) -> Task<Message> {
    let mut payload = Map::new();
    payload.insert("title".to_string(), Value::String(title));
    payload.insert("body".to_string(), Value::String(body));
    Task::perform(
        async move {
            api.send_notification(&user_id, payload)
                .await
                .map_err(|e| e.user_message())
        },
        done(Resource::Users, MutationKind::Notify),
    )
}

// =============================================================================
// SESSION & FILES
// =============================================================================

pub fn login(api: Arc<ApiClient>, email: String, password: String) -> Task<Message> {
    Task::perform(
        async move {
            api.login(&email, &password)
                .await
                .map(|session| session.user)
                .map_err(|e| e.user_message())
        },
        |result| Message::Session(SessionMessage::Done(result)),
    )
}

/// Open the native image picker for a dialog attachment field.
pub fn pick_image(resource: Resource, field: &'static str) -> Task<Message> {
    Task::perform(
        async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                .pick_file()
                .await
            else {
                return None;
            };
            let name = handle.file_name();
            let bytes = handle.read().await;
            Some(PickedFile {
                mime: mime_for(&name),
                name,
                bytes,
            })
        },
        move |picked| Message::Dialog(resource, crate::message::DialogMessage::FilePicked(field, picked)),
    )
}

/// Content type from a file name extension.
fn mime_for(name: &str) -> String {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_detection() {
        assert_eq!(mime_for("hero.PNG"), "image/png");
        assert_eq!(mime_for("logo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("unknown"), "application/octet-stream");
    }
}
