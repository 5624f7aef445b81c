//! Orders screen: status progression and restock-aware deletion.

use iced::widget::{button, pick_list, row};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use bazaar_model::{Record, Resource};

use crate::message::{Message, PageMessage};
use crate::resource::spec;
use crate::state::{AppState, PageExtra};
use crate::theme::SPACING_XS;
use crate::view::resource::{overlay_dialogs, view_table_screen};

/// Render the orders screen.
pub fn view_orders(state: &AppState) -> Element<'_, Message> {
    let statuses = match state.page(Resource::Orders).map(|p| &p.extra) {
        Some(PageExtra::Orders { statuses }) => statuses.clone(),
        _ => Vec::new(),
    };

    let base = view_table_screen(state, Resource::Orders, move |record| {
        order_actions(record, statuses.clone())
    });

    overlay_dialogs(state, Resource::Orders, spec(Resource::Orders), base)
}

fn order_actions(record: &Record, statuses: Vec<String>) -> Element<'static, Message> {
    let id = record.id().clone();
    let current = record.text("status");
    let selected = statuses.iter().find(|s| **s == current).cloned();

    let status_id = id.clone();
    let status_picker = pick_list(statuses, selected, move |status| {
        Message::Page(
            Resource::Orders,
            PageMessage::StatusPicked(status_id.clone(), status),
        )
    })
    .text_size(13)
    .width(120.0);

    let label = record.text("orderNumber");
    let label = if label.is_empty() {
        id.to_string()
    } else {
        label
    };
    let delete = button(lucide::trash().size(14))
        .on_press(Message::Page(
            Resource::Orders,
            PageMessage::DeleteRequested { id, label },
        ))
        .padding(SPACING_XS)
        .style(button::danger);

    row![status_picker, delete]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
}
