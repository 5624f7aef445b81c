//! Navigation sidebar.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use bazaar_model::Resource;

use crate::message::{Message, SessionMessage};
use crate::state::Screen;
use crate::theme::{SIDEBAR_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS};

/// Render the navigation sidebar.
pub fn sidebar(active: Screen, admin_name: String) -> Element<'static, Message> {
    let mut items = column![nav_item("Dashboard", Screen::Dashboard, active)].spacing(SPACING_XS);

    for resource in Resource::ALL {
        let screen = Screen::Resource(resource);
        items = items.push(nav_item(screen.title(), screen, active));
    }

    let footer = column![
        text(admin_name).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        }),
        button(
            row![lucide::log_out().size(14), text("Sign out").size(13)]
                .spacing(SPACING_SM)
                .align_y(iced::Alignment::Center)
        )
        .on_press(Message::Session(SessionMessage::Logout))
        .padding([SPACING_XS, SPACING_SM])
        .style(button::text),
    ]
    .spacing(SPACING_XS);

    let content = column![
        text("Bazaar Admin").size(18),
        Space::new().height(SPACING_MD),
        scrollable(items).height(Length::Fill),
        footer,
    ]
    .spacing(SPACING_SM)
    .padding(SPACING_MD);

    container(content)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..container::Style::default()
        })
        .into()
}

fn nav_item(label: &'static str, screen: Screen, active: Screen) -> Element<'static, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if screen == active {
        button::primary
    } else {
        button::text
    };
    button(text(label).size(13))
        .on_press(Message::Navigate(screen))
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(style)
        .into()
}
