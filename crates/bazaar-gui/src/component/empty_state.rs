//! Empty / loading placeholder for list areas.

use iced::widget::{center, column, text};
use iced::{Element, Length, Theme};

use crate::theme::SPACING_SM;

/// Centered placeholder with a headline and a supporting line.
pub fn empty_state<'a, M: 'a>(headline: &'a str, detail: &'a str) -> Element<'a, M> {
    let content = column![
        text(headline).size(16),
        text(detail).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        }),
    ]
    .spacing(SPACING_SM)
    .align_x(iced::Alignment::Center);

    center(content).height(Length::Fill).into()
}
