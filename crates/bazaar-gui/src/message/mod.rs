//! Application messages.
//!
//! The root [`Message`] enum fans out to per-feature enums; `App::update`
//! dispatches each branch to its handler.

use bazaar_api::InventoryOp;
use bazaar_model::{Record, RecordId, Resource};
use bazaar_query::FetchTicket;

use crate::state::{Screen, ToastKind};

/// Root application message.
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch the active screen (unmounts the old one's queries).
    Navigate(Screen),
    /// Login / logout flow.
    Session(SessionMessage),
    /// Page-level interactions for one resource screen.
    Page(Resource, PageMessage),
    /// Create/edit dialog interactions for one resource screen.
    Dialog(Resource, DialogMessage),
    /// A list fetch finished.
    FetchDone {
        ticket: FetchTicket,
        result: Result<Vec<Record>, String>,
    },
    /// A mutation finished.
    MutationDone {
        resource: Resource,
        kind: MutationKind,
        result: Result<(), String>,
    },
    /// Toast lifecycle.
    Toast(ToastMessage),
    /// No-op placeholder for subscriptions that produce nothing.
    Noop,
}

/// Login screen and session messages.
#[derive(Debug, Clone)]
pub enum SessionMessage {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    /// Login attempt finished; on success carries the signed-in admin.
    Done(Result<Record, String>),
    Logout,
}

/// Messages for the table/list portion of a resource screen.
#[derive(Debug, Clone)]
pub enum PageMessage {
    /// A sortable column header was clicked.
    SortRequested(&'static str),
    /// Open the create dialog.
    NewClicked,
    /// Open the edit dialog for a row.
    EditClicked(RecordId),
    /// Ask for delete confirmation.
    DeleteRequested { id: RecordId, label: String },
    ConfirmDelete,
    CancelDelete,
    /// Orders only: toggle restock-on-delete in the confirm modal.
    RestockToggled(bool),

    // Inventory-specific inline editor.
    QuantityChanged(RecordId, String),
    OperationChanged(RecordId, InventoryOp),
    AdjustSubmitted(RecordId),

    // Orders-specific.
    StatusPicked(RecordId, String),
    StatusesLoaded(Result<Vec<String>, String>),

    // Contact-specific.
    FilterStatusPicked(String),
    SearchChanged(String),
    SearchSubmitted,
    ViewClicked(RecordId),
    ViewClosed,
    ReplyClicked(RecordId),
    ReplyChanged(String),
    ReplySubmitted,
    ReplyCancelled,

    // Users-specific notification dialog.
    NotifyClicked(RecordId),
    NotifyTitleChanged(String),
    NotifyBodyChanged(String),
    NotifySubmitted,
    NotifyCancelled,
}

/// Messages for the create/edit dialog of a resource screen.
#[derive(Debug, Clone)]
pub enum DialogMessage {
    FieldChanged(&'static str, String),
    FlagToggled(&'static str, bool),
    SelectPicked(&'static str, String),
    /// Open the native file picker for an attachment field.
    PickFile(&'static str),
    /// The picker returned (None = cancelled).
    FilePicked(&'static str, Option<PickedFile>),
    /// Drop the attachment, leaving the field empty.
    ClearFile(&'static str),
    /// Edit the URL-based value of an attachment field; reverting to a URL
    /// releases any pending preview.
    UrlChanged(&'static str, String),
    Submit,
    Cancel,
}

/// A file chosen through the native picker.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// What a finished mutation was doing; drives toast labels and dialog
/// teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    /// Inventory quantity adjustment.
    Adjust,
    /// Order or contact status update.
    Status,
    /// Contact reply.
    Reply,
    /// User notification send (does not touch any collection).
    Notify,
}

impl MutationKind {
    /// Whether a successful mutation of this kind changed the resource's
    /// collection and must invalidate it.
    pub const fn invalidates(self) -> bool {
        !matches!(self, Self::Notify)
    }
}

/// Toast lifecycle messages.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    Show(String, ToastKind),
    Dismiss,
    /// Periodic tick from the auto-dismiss subscription.
    Tick,
}
