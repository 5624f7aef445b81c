//! Login / logout handling.
//!
//! Logout is the one global teardown path: the token drops, every open
//! draft releases its previews, and the whole query cache clears.

use std::sync::Arc;

use iced::Task;

use bazaar_api::ApiClient;

use crate::handler::{MessageHandler, navigate};
use crate::message::{Message, SessionMessage};
use crate::service;
use crate::state::{AppState, Screen, ToastKind};

/// Handler for [`SessionMessage`]s.
pub struct SessionHandler;

impl MessageHandler<SessionMessage> for SessionHandler {
    fn handle(
        &self,
        state: &mut AppState,
        msg: SessionMessage,
        api: &Arc<ApiClient>,
    ) -> Task<Message> {
        match msg {
            SessionMessage::EmailChanged(email) => {
                state.session.form.email = email;
                Task::none()
            }

            SessionMessage::PasswordChanged(password) => {
                state.session.form.password = password;
                Task::none()
            }

            SessionMessage::Submit => {
                let form = &state.session.form;
                if form.email.trim().is_empty() || form.password.is_empty() {
                    state
                        .toast
                        .show("Email and password are required", ToastKind::Warning);
                    return Task::none();
                }
                let email = form.email.trim().to_string();
                let password = form.password.clone();
                state.session.form.busy = true;
                state.session.form.error = None;
                service::login(api.clone(), email, password)
            }

            SessionMessage::Done(Ok(user)) => {
                state.session.sign_in(user);
                state.toast.show("Signed in", ToastKind::Success);
                navigate(state, api, Screen::Dashboard)
            }

            SessionMessage::Done(Err(message)) => {
                state.session.form.busy = false;
                state.session.form.error = Some(message.clone());
                state.toast.show(message, ToastKind::Error);
                Task::none()
            }

            SessionMessage::Logout => {
                api.logout();
                // Open drafts must release their previews before the pages
                // holding them go away.
                let pages = std::mem::take(&mut state.pages);
                for (_, mut page) in pages {
                    if let Some(draft) = page.dialog.take() {
                        draft.discard(&mut state.previews);
                    }
                }
                state.cache.clear();
                state.session.sign_out();
                state.screen = Screen::Dashboard;
                state.toast.show("Signed out", ToastKind::Success);
                Task::none()
            }
        }
    }
}
