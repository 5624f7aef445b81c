//! Toast channel message handling.

use std::sync::Arc;
use std::time::Instant;

use iced::Task;

use bazaar_api::ApiClient;

use crate::handler::MessageHandler;
use crate::message::{Message, ToastMessage};
use crate::state::AppState;

/// Handler for [`ToastMessage`]s.
pub struct ToastHandler;

impl MessageHandler<ToastMessage> for ToastHandler {
    fn handle(
        &self,
        state: &mut AppState,
        msg: ToastMessage,
        _api: &Arc<ApiClient>,
    ) -> Task<Message> {
        match msg {
            ToastMessage::Show(message, kind) => state.toast.show(message, kind),
            ToastMessage::Dismiss => state.toast.dismiss(),
            ToastMessage::Tick => state.toast.tick(Instant::now()),
        }
        Task::none()
    }
}
