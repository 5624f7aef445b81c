//! Page header card: title, subtitle, and an optional primary action.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{SPACING_MD, SPACING_SM, card};

/// Render a page header. `action` is the "New ..." button when present.
pub fn page_header<'a, M: Clone + 'a>(
    title: &'a str,
    subtitle: &'a str,
    action: Option<(&'a str, M)>,
) -> Element<'a, M> {
    let titles = column![
        text(title).size(22),
        text(subtitle).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        }),
    ]
    .spacing(2.0);

    let mut header = row![titles, Space::new().width(Length::Fill)].align_y(Alignment::Center);

    if let Some((label, message)) = action {
        header = header.push(
            button(
                row![lucide::plus().size(14), text(label).size(14)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(message)
            .padding([SPACING_SM, SPACING_MD])
            .style(button::primary),
        );
    }

    container(header)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(card)
        .into()
}
