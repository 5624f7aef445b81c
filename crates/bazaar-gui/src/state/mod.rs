//! Application state, separated by concern.

pub mod app_state;
pub mod draft;
pub mod page;
pub mod session;
pub mod toast;

pub use app_state::{AppState, DASHBOARD_RESOURCES, Screen};
pub use draft::{DraftForm, FileSlot, PreviewId, PreviewStore};
pub use page::{ConfirmDelete, InventoryEdit, NotifyDraft, PageExtra, PageState, ReplyDraft};
pub use session::{LoginForm, SessionState};
pub use toast::{TOAST_DURATION, Toast, ToastChannel, ToastKind};
