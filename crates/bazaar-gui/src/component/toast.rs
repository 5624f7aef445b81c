//! Toast notification component.
//!
//! Renders the single pending toast with a severity icon and a dismiss
//! button. Lifecycle (replacement, auto-dismiss) lives in
//! [`crate::state::ToastChannel`]; this is the view only.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::message::{Message, ToastMessage};
use crate::state::{Toast, ToastKind};
use crate::theme::{BORDER_RADIUS_LG, SPACING_MD, SPACING_SM, SPACING_XS};

impl ToastKind {
    /// Severity color.
    fn color(self, theme: &Theme) -> iced::Color {
        let palette = theme.extended_palette();
        match self {
            Self::Success => palette.success.base.color,
            Self::Warning => palette.warning.base.color,
            Self::Error => palette.danger.base.color,
        }
    }
}

/// Renders the toast notification.
pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let kind = toast.kind;

    let icon = match kind {
        ToastKind::Success => lucide::circle_check().size(18),
        ToastKind::Warning => lucide::triangle_alert().size(18),
        ToastKind::Error => lucide::circle_x().size(18),
    };
    let icon = container(icon).style(move |theme: &Theme| container::Style {
        text_color: Some(kind.color(theme)),
        ..container::Style::default()
    });

    let message_text = text(&toast.message).size(14);

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button::text);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: BORDER_RADIUS_LG.into(),
                },
                shadow: Shadow {
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..container::Style::default()
            }
        })
        .into()
}
