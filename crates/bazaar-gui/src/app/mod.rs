//! Main application module.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State -> Message -> Update -> View.
//! All state changes happen in `update()`; views are pure functions; async
//! work runs through `Task::perform` and comes back as messages.

pub mod subscription;

use std::sync::Arc;

use iced::widget::{container, row, stack};
use iced::{Element, Length, Subscription, Task, Theme};

use bazaar_api::ApiClient;

use crate::component::{sidebar, view_toast};
use crate::config::Settings;
use crate::handler::{
    DialogHandler, FetchDone, MessageHandler, MutationDone, MutationHandler, PageHandler,
    QueryHandler, SessionHandler, ToastHandler, navigate,
};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::SPACING_MD;
use crate::view::{login::view_login, view_screen};

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
    /// Shared backend client, cloned into background tasks.
    pub api: Arc<ApiClient>,
}

impl App {
    /// Create a new application instance.
    pub fn new(api: Arc<ApiClient>, settings: Settings) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::with_settings(settings),
            api,
        };
        (app, Task::none())
    }

    /// Window title.
    pub fn title(&self) -> String {
        format!("Bazaar Admin Studio - {}", self.state.screen.title())
    }

    /// Theme follows the persisted setting.
    pub fn theme(&self) -> Theme {
        if self.state.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => navigate(&mut self.state, &self.api, screen),

            Message::Session(msg) => SessionHandler.handle(&mut self.state, msg, &self.api),

            Message::Page(resource, msg) => {
                PageHandler.handle(&mut self.state, (resource, msg), &self.api)
            }

            Message::Dialog(resource, msg) => {
                DialogHandler.handle(&mut self.state, (resource, msg), &self.api)
            }

            Message::FetchDone { ticket, result } => {
                QueryHandler.handle(&mut self.state, FetchDone { ticket, result }, &self.api)
            }

            Message::MutationDone {
                resource,
                kind,
                result,
            } => MutationHandler.handle(
                &mut self.state,
                MutationDone {
                    resource,
                    kind,
                    result,
                },
                &self.api,
            ),

            Message::Toast(msg) => ToastHandler.handle(&mut self.state, msg, &self.api),

            Message::Noop => Task::none(),
        }
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = if self.state.session.is_signed_in() {
            row![
                sidebar(self.state.screen, self.state.session.display_name()),
                container(view_screen(&self.state))
                    .width(Length::Fill)
                    .height(Length::Fill),
            ]
            .into()
        } else {
            view_login(&self.state)
        };

        // Toast overlay, bottom-right.
        match self.state.toast.current() {
            Some(toast) => stack![
                content,
                container(view_toast(toast))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Right)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .padding(SPACING_MD),
            ]
            .into(),
            None => content,
        }
    }

    /// Application subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
