//! Login screen.

use iced::widget::{button, center, column, container, text, text_input};
use iced::{Element, Length, Theme};

use crate::message::{Message, SessionMessage};
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, card};

/// Render the login screen.
pub fn view_login(state: &AppState) -> Element<'_, Message> {
    let form = &state.session.form;

    let email = text_input("admin@example.com", &form.email)
        .on_input(|v| Message::Session(SessionMessage::EmailChanged(v)))
        .padding(10.0);

    let password = text_input("Password", &form.password)
        .on_input(|v| Message::Session(SessionMessage::PasswordChanged(v)))
        .on_submit(Message::Session(SessionMessage::Submit))
        .secure(true)
        .padding(10.0);

    let submit = button(
        text(if form.busy { "Signing in..." } else { "Sign in" }).size(14),
    )
    .on_press_maybe((!form.busy).then_some(Message::Session(SessionMessage::Submit)))
    .padding([SPACING_SM, SPACING_LG])
    .width(Length::Fill)
    .style(button::primary);

    let mut fields = column![
        text("Bazaar Admin Studio").size(24),
        text("Sign in to manage the storefront")
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
        email,
        password,
        submit,
    ]
    .spacing(SPACING_MD);

    if let Some(error) = &form.error {
        fields = fields.push(text(error).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }));
    }

    let panel = container(fields)
        .width(Length::Fixed(360.0))
        .padding(SPACING_LG)
        .style(card);

    center(panel).into()
}
