//! The generic CRUD screen.
//!
//! Every standard resource renders through here: header, sortable table,
//! per-row edit/delete actions, the create/edit dialog, and the delete
//! confirmation. Screens with extra machinery (inventory, orders, contact)
//! have their own view modules but reuse these helpers.

use iced::widget::{Space, button, checkbox, column, container, image, pick_list, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use bazaar_model::{ColumnKind, Record, Resource};

use crate::component::{
    TableColumn, data_table, empty_state, form_field, modal, multiline_field, page_header,
};
use crate::message::{DialogMessage, Message, PageMessage};
use crate::resource::{ColumnSpec, FieldKind, ResourceSpec, column_kind, spec};
use crate::state::{AppState, DraftForm, PageState};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, card};

/// Render a standard resource screen.
pub fn view_resource(state: &AppState, resource: Resource) -> Element<'_, Message> {
    let spec = spec(resource);
    let base = view_table_screen(state, resource, |record| {
        row_actions(state, resource, record)
    });

    overlay_dialogs(state, resource, spec, base)
}

/// Header + table for a resource, with custom per-row action cells.
pub fn view_table_screen<'a>(
    state: &'a AppState,
    resource: Resource,
    actions: impl Fn(&Record) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let spec = spec(resource);
    let Some(page) = state.page(resource) else {
        return empty_state("Loading", "Preparing the screen");
    };

    let action = spec
        .can_create
        .then(|| {
            (
                "New",
                Message::Page(resource, PageMessage::NewClicked),
            )
        });
    let header = page_header(spec.title, spec.subtitle, action);

    let key = page.query_key();
    let body: Element<'a, Message> = if state.cache.is_loading(&key) {
        empty_state("Loading", "Fetching the latest data")
    } else if let Some(records) = state.cache.records(&key) {
        if records.is_empty() {
            empty_state("Nothing here yet", "Records you add will show up in this list")
        } else {
            let sorted = page
                .sort
                .apply(records, |column| column_kind(resource, column));
            view_table(page, spec, &sorted, actions)
        }
    } else if let Some(error) = state.cache.error(&key) {
        empty_state("Could not load", error)
    } else {
        empty_state("Loading", "Fetching the latest data")
    };

    column![header, body]
        .spacing(SPACING_MD)
        .padding(SPACING_MD)
        .into()
}

fn view_table<'a>(
    page: &'a PageState,
    spec: &'static ResourceSpec,
    records: &[Record],
    actions: impl Fn(&Record) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let resource = spec.resource;
    let mut columns: Vec<TableColumn> = spec
        .columns
        .iter()
        .map(|c| TableColumn::sortable(c.label, c.id, 2))
        .collect();
    // The inline editors need more room than a pair of icon buttons.
    let actions_width = match resource {
        Resource::Inventory => 300.0,
        Resource::Orders => 230.0,
        Resource::Contact => 170.0,
        _ => 150.0,
    };
    columns.push(TableColumn::fixed("Actions", actions_width));

    let rows: Vec<Vec<Element<'a, Message>>> = records
        .iter()
        .map(|record| {
            let mut cells: Vec<Element<'a, Message>> = spec
                .columns
                .iter()
                .map(|c| text(cell_text(record, c)).size(13).into())
                .collect();
            cells.push(actions(record));
            cells
        })
        .collect();

    let table = data_table(&columns, rows, &page.sort, move |column| {
        Message::Page(resource, PageMessage::SortRequested(column))
    });

    container(table)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(card)
        .into()
}

/// Text for one table cell, shaped by the column kind.
pub fn cell_text(record: &Record, column: &ColumnSpec) -> String {
    match column.kind {
        ColumnKind::Flag => {
            if record.flag(column.id) { "Yes" } else { "No" }.to_string()
        }
        ColumnKind::Number => {
            let value = record.number(column.id);
            if value.fract() == 0.0 {
                format!("{}", value as i64)
            } else {
                format!("{value}")
            }
        }
        ColumnKind::Text | ColumnKind::Date => record.text(column.id),
    }
}

/// Edit/delete buttons for a standard row.
fn row_actions<'a>(
    _state: &'a AppState,
    resource: Resource,
    record: &Record,
) -> Element<'a, Message> {
    let spec = spec(resource);
    let id = record.id().clone();
    let label = record.text("name");
    let label = if label.is_empty() {
        record.text("title")
    } else {
        label
    };

    let mut actions = row![].spacing(SPACING_XS).align_y(Alignment::Center);
    if spec.can_edit {
        actions = actions.push(
            button(lucide::pencil().size(14))
                .on_press(Message::Page(resource, PageMessage::EditClicked(id.clone())))
                .padding(SPACING_XS)
                .style(button::text),
        );
    }
    if spec.can_delete {
        actions = actions.push(
            button(lucide::trash().size(14))
                .on_press(Message::Page(
                    resource,
                    PageMessage::DeleteRequested { id, label },
                ))
                .padding(SPACING_XS)
                .style(button::danger),
        );
    }
    actions.into()
}

/// Wrap a screen with its dialog and confirm overlays, when open.
pub fn overlay_dialogs<'a>(
    state: &'a AppState,
    resource: Resource,
    spec: &'static ResourceSpec,
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    let Some(page) = state.page(resource) else {
        return base;
    };

    if let Some(draft) = &page.dialog {
        let title = if draft.editing.is_some() {
            format!("Edit {}", spec.singular)
        } else {
            format!("New {}", spec.singular)
        };
        return view_dialog(state, resource, draft, title, page.busy, base);
    }

    if let Some(confirm) = &page.confirm {
        let body: Element<'a, Message> = if resource == Resource::Orders {
            column![
                text(format!("Delete \"{}\"? This cannot be undone.", confirm.label)).size(14),
                checkbox(confirm.restock)
                    .label("Restock the ordered products")
                    .on_toggle(move |on| Message::Page(resource, PageMessage::RestockToggled(on))),
            ]
            .spacing(SPACING_SM)
            .into()
        } else {
            text(format!("Delete \"{}\"? This cannot be undone.", confirm.label))
                .size(14)
                .into()
        };

        let actions = vec![
            button(text("Cancel").size(14))
                .on_press(Message::Page(resource, PageMessage::CancelDelete))
                .style(button::secondary)
                .into(),
            button(text(if page.busy { "Deleting..." } else { "Delete" }).size(14))
                .on_press_maybe(
                    (!page.busy).then_some(Message::Page(resource, PageMessage::ConfirmDelete)),
                )
                .style(button::danger)
                .into(),
        ];

        return modal(
            base,
            "Confirm delete",
            body,
            Message::Page(resource, PageMessage::CancelDelete),
            actions,
        );
    }

    base
}

/// The create/edit dialog body, driven by the resource's field specs.
fn view_dialog<'a>(
    state: &'a AppState,
    resource: Resource,
    draft: &'a DraftForm,
    title: String,
    busy: bool,
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut fields = column![].spacing(SPACING_SM);

    for field in spec(resource).fields {
        let name = field.name;
        let element: Element<'a, Message> = match field.kind {
            FieldKind::Text | FieldKind::Number | FieldKind::Tags => form_field(
                field.label,
                draft.text(name),
                "",
                move |value| Message::Dialog(resource, DialogMessage::FieldChanged(name, value)),
            ),
            FieldKind::Multiline => multiline_field(
                field.label,
                draft.text(name),
                "",
                move |value| Message::Dialog(resource, DialogMessage::FieldChanged(name, value)),
            ),
            FieldKind::Flag => checkbox(draft.flag(name))
                .label(field.label)
                .on_toggle(move |on| Message::Dialog(resource, DialogMessage::FlagToggled(name, on)))
                .into(),
            FieldKind::Select(options) => {
                let current = draft.text(name);
                let selected = options.iter().copied().find(|o| *o == current);
                column![
                    text(field.label).size(13).style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
                    pick_list(options, selected, move |value: &'static str| {
                        Message::Dialog(
                            resource,
                            DialogMessage::SelectPicked(name, value.to_string()),
                        )
                    }),
                ]
                .spacing(SPACING_XS)
                .into()
            }
            FieldKind::File { .. } => view_file_field(state, resource, field.label, name, draft),
        };
        fields = fields.push(element);
    }

    let scroll = iced::widget::scrollable(fields).height(Length::Fixed(420.0));

    let actions = vec![
        button(text("Cancel").size(14))
            .on_press(Message::Dialog(resource, DialogMessage::Cancel))
            .style(button::secondary)
            .into(),
        button(text(if busy { "Saving..." } else { "Save" }).size(14))
            .on_press_maybe((!busy).then_some(Message::Dialog(resource, DialogMessage::Submit)))
            .style(button::primary)
            .into(),
    ];

    modal(
        base,
        title,
        scroll.into(),
        Message::Dialog(resource, DialogMessage::Cancel),
        actions,
    )
}

/// One attachment field: picker, preview, clear, and URL fallback.
fn view_file_field<'a>(
    state: &'a AppState,
    resource: Resource,
    label: &'a str,
    name: &'static str,
    draft: &'a DraftForm,
) -> Element<'a, Message> {
    let slot = draft.file(name);

    let mut content = column![
        text(label).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        }),
    ]
    .spacing(SPACING_XS);

    let mut controls = row![
        button(text("Choose image...").size(13))
            .on_press(Message::Dialog(resource, DialogMessage::PickFile(name)))
            .style(button::secondary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    if let Some(picked) = slot.and_then(|s| s.picked.as_ref()) {
        controls = controls.push(text(picked.name.clone()).size(12));
        controls = controls.push(
            button(lucide::x().size(12))
                .on_press(Message::Dialog(resource, DialogMessage::ClearFile(name)))
                .padding(SPACING_XS)
                .style(button::text),
        );
    }
    content = content.push(controls);

    // Live preview of the picked file.
    if let Some(handle) = slot
        .and_then(|s| s.preview)
        .and_then(|id| state.previews.get(id))
    {
        content = content.push(
            image(handle.clone())
                .width(Length::Fixed(140.0))
                .height(Length::Fixed(90.0)),
        );
    }

    // URL-based value, only when no file is pending.
    if slot.is_none_or(|s| s.picked.is_none()) {
        let url = slot.map(|s| s.url.as_str()).unwrap_or("");
        content = content.push(form_field(
            "or image URL",
            url,
            "https://",
            move |value| Message::Dialog(resource, DialogMessage::UrlChanged(name, value)),
        ));
    }

    content = content.push(Space::new().height(SPACING_XS));
    container(content).width(Length::Fill).padding([SPACING_XS, 0.0]).into()
}
