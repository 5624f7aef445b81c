//! Inventory screen: inline per-row stock adjustment.

use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Alignment, Element};

use bazaar_api::InventoryOp;
use bazaar_model::Resource;

use crate::message::{Message, PageMessage};
use crate::state::{AppState, InventoryEdit, PageExtra};
use crate::theme::SPACING_XS;
use crate::view::resource::view_table_screen;

/// Render the inventory screen.
pub fn view_inventory(state: &AppState) -> Element<'_, Message> {
    view_table_screen(state, Resource::Inventory, |record| {
        let id = record.id().clone();
        let edit = match state
            .page(Resource::Inventory)
            .map(|p| &p.extra)
        {
            Some(PageExtra::Inventory { edits }) => edits.get(record.id()).cloned(),
            _ => None,
        }
        .unwrap_or_default();

        adjust_row(id, edit)
    })
}

/// Quantity input + operation picker + apply button for one product row.
fn adjust_row(id: bazaar_model::RecordId, edit: InventoryEdit) -> Element<'static, Message> {
    let quantity_id = id.clone();
    let op_id = id.clone();
    let submit_id = id.clone();

    let quantity = text_input("Amount", &edit.quantity)
        .on_input(move |value| {
            Message::Page(
                Resource::Inventory,
                PageMessage::QuantityChanged(quantity_id.clone(), value),
            )
        })
        .width(90.0)
        .padding(6.0);

    let operation = pick_list(InventoryOp::ALL, Some(edit.op), move |op| {
        Message::Page(
            Resource::Inventory,
            PageMessage::OperationChanged(op_id.clone(), op),
        )
    })
    .text_size(13);

    let apply = button(text("Apply").size(13))
        .on_press(Message::Page(
            Resource::Inventory,
            PageMessage::AdjustSubmitted(submit_id),
        ))
        .padding([4.0, 10.0])
        .style(button::primary);

    row![quantity, operation, apply]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
}
