//! Contact inbox screen: status filter, search, view and reply dialogs.

use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use bazaar_model::{Record, Resource};

use crate::component::{modal, multiline_field};
use crate::message::{Message, PageMessage};
use crate::resource::spec;
use crate::state::{AppState, PageExtra};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, card};
use crate::view::resource::{overlay_dialogs, view_table_screen};

/// Status filter options ("all" clears the filter).
const STATUS_FILTERS: [&str; 4] = ["all", "new", "read", "replied"];

/// Render the contact inbox.
pub fn view_contact(state: &AppState) -> Element<'_, Message> {
    let table = view_table_screen(state, Resource::Contact, |record| contact_actions(record));

    let (filter, search, viewing, reply) = match state.page(Resource::Contact).map(|p| &p.extra) {
        Some(PageExtra::Contact {
            status_filter,
            search_input,
            viewing,
            reply,
            ..
        }) => (
            status_filter.clone(),
            search_input.clone(),
            viewing.clone(),
            reply.clone(),
        ),
        _ => (String::new(), String::new(), None, None),
    };

    let base: Element<'_, Message> = column![filter_bar(&filter, &search), table]
        .spacing(SPACING_SM)
        .into();

    // View-message modal takes precedence over the generic overlays.
    if let Some(record) = viewing {
        return view_message_modal(base, &record);
    }
    if let Some(draft) = reply {
        return reply_modal(base, &draft.message, state);
    }

    overlay_dialogs(state, Resource::Contact, spec(Resource::Contact), base)
}

fn filter_bar<'a>(filter: &str, search: &str) -> Element<'a, Message> {
    let selected = if filter.is_empty() { "all" } else { filter };
    let selected = STATUS_FILTERS.iter().copied().find(|s| *s == selected);

    let status = pick_list(STATUS_FILTERS, selected, |status: &'static str| {
        Message::Page(
            Resource::Contact,
            PageMessage::FilterStatusPicked(status.to_string()),
        )
    })
    .text_size(13);

    let search_box = text_input("Search name, email, subject...", search)
        .on_input(|v| Message::Page(Resource::Contact, PageMessage::SearchChanged(v)))
        .on_submit(Message::Page(Resource::Contact, PageMessage::SearchSubmitted))
        .padding(8.0)
        .width(Length::Fixed(260.0));

    let search_btn = button(lucide::search().size(14))
        .on_press(Message::Page(Resource::Contact, PageMessage::SearchSubmitted))
        .padding(SPACING_XS)
        .style(button::secondary);

    container(
        row![status, Space::new().width(SPACING_SM), search_box, search_btn]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(card)
    .width(Length::Fill)
    .into()
}

fn contact_actions(record: &Record) -> Element<'static, Message> {
    let id = record.id().clone();
    let view_id = id.clone();
    let reply_id = id.clone();
    let label = record.text("subject");

    row![
        button(lucide::eye().size(14))
            .on_press(Message::Page(
                Resource::Contact,
                PageMessage::ViewClicked(view_id),
            ))
            .padding(SPACING_XS)
            .style(button::text),
        button(lucide::reply().size(14))
            .on_press(Message::Page(
                Resource::Contact,
                PageMessage::ReplyClicked(reply_id),
            ))
            .padding(SPACING_XS)
            .style(button::text),
        button(lucide::trash().size(14))
            .on_press(Message::Page(
                Resource::Contact,
                PageMessage::DeleteRequested { id, label },
            ))
            .padding(SPACING_XS)
            .style(button::danger),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn view_message_modal<'a>(base: Element<'a, Message>, record: &Record) -> Element<'a, Message> {
    let detail = |label: &'static str, value: String| {
        column![
            text(label).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
            text(value).size(14),
        ]
        .spacing(2.0)
    };

    let body = column![
        detail("From", format!("{} <{}>", record.text("name"), record.text("email"))),
        detail("Subject", record.text("subject")),
        detail("Status", record.text("status")),
        detail("Message", record.text("message")),
    ]
    .spacing(SPACING_SM);

    let reply_id = record.id().clone();
    let actions = vec![
        button(text("Close").size(14))
            .on_press(Message::Page(Resource::Contact, PageMessage::ViewClosed))
            .style(button::secondary)
            .into(),
        button(text("Reply").size(14))
            .on_press(Message::Page(
                Resource::Contact,
                PageMessage::ReplyClicked(reply_id),
            ))
            .style(button::primary)
            .into(),
    ];

    modal(
        base,
        "Contact message",
        body.into(),
        Message::Page(Resource::Contact, PageMessage::ViewClosed),
        actions,
    )
}

fn reply_modal<'a>(
    base: Element<'a, Message>,
    message: &str,
    state: &'a AppState,
) -> Element<'a, Message> {
    let busy = state
        .page(Resource::Contact)
        .is_some_and(|p| p.busy);

    let body = multiline_field("Reply", message, "Write your reply...", |v| {
        Message::Page(Resource::Contact, PageMessage::ReplyChanged(v))
    });

    let actions = vec![
        button(text("Cancel").size(14))
            .on_press(Message::Page(Resource::Contact, PageMessage::ReplyCancelled))
            .style(button::secondary)
            .into(),
        button(text(if busy { "Sending..." } else { "Send reply" }).size(14))
            .on_press_maybe(
                (!busy).then_some(Message::Page(Resource::Contact, PageMessage::ReplySubmitted)),
            )
            .style(button::primary)
            .into(),
    ];

    modal(
        base,
        "Reply to message",
        body,
        Message::Page(Resource::Contact, PageMessage::ReplyCancelled),
        actions,
    )
}
