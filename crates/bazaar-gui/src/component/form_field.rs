//! Form field components.

use iced::widget::{column, text, text_input};
use iced::{Element, Length, Theme};

use crate::theme::SPACING_XS;

/// A labeled single-line text field.
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let label_text = text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill);

    column![label_text, input].spacing(SPACING_XS).into()
}

/// A labeled multi-line text area.
///
/// Iced's `text_editor` owns its content; drafts keep plain strings, so
/// multiline fields are rendered as taller `text_input`s instead. Kept as a
/// separate constructor so the swap stays local if that trade-off changes.
pub fn multiline_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let label_text = text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(14.0)
        .width(Length::Fill);

    column![label_text, input].spacing(SPACING_XS).into()
}
