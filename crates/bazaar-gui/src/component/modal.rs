//! Modal dialog overlay component.
//!
//! A centered dialog on top of the base content with a semi-transparent
//! backdrop. Clicking the backdrop does NOT close the modal - use the close
//! button or an action.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_LG, MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, backdrop};

/// Creates a modal dialog overlay.
///
/// # Arguments
///
/// * `base` - The background content (entire screen)
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message for the close button
/// * `actions` - Action buttons for the footer
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: impl Into<String>,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let header = row![
        text(title.into()).size(18),
        space::horizontal(),
        button(lucide::x().size(18))
            .on_press(on_close)
            .padding([4.0, 8.0])
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH))
    .padding(SPACING_LG)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.base.color.into()),
            border: Border {
                radius: BORDER_RADIUS_LG.into(),
                width: 1.0,
                color: palette.background.strong.color,
            },
            shadow: Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..container::Style::default()
        }
    });

    stack![base, opaque(center(dialog).style(backdrop))].into()
}
