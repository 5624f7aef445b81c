//! Data table component.
//!
//! Column headers are clickable when a column is sortable; the active sort
//! column shows a direction chevron. Cells are arbitrary elements so screens
//! can embed inputs and action buttons in rows.

use iced::widget::{button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use bazaar_model::{SortOrder, SortState};

use crate::theme::{TABLE_CELL_PADDING, table_header};

/// Column definition for a data table.
pub struct TableColumn {
    /// Column header text.
    pub header: String,
    /// Column width.
    pub width: Length,
    /// Field id to sort by when the header is clicked, if sortable.
    pub sort_id: Option<&'static str>,
}

impl TableColumn {
    /// Sortable column that fills a width portion.
    pub fn sortable(header: impl Into<String>, sort_id: &'static str, portion: u16) -> Self {
        Self {
            header: header.into(),
            width: Length::FillPortion(portion),
            sort_id: Some(sort_id),
        }
    }

    /// Non-sortable column with fixed width (action columns).
    pub fn fixed(header: impl Into<String>, width: f32) -> Self {
        Self {
            header: header.into(),
            width: Length::Fixed(width),
            sort_id: None,
        }
    }
}

/// Creates a data table with sortable headers.
///
/// # Arguments
///
/// * `columns` - Column definitions
/// * `rows` - Row data (each row is one cell element per column)
/// * `sort` - The table's current sort state
/// * `on_sort` - Message factory for header clicks
pub fn data_table<'a, M: Clone + 'a>(
    columns: &[TableColumn],
    rows: Vec<Vec<Element<'a, M>>>,
    sort: &SortState,
    on_sort: impl Fn(&'static str) -> M + 'a,
) -> Element<'a, M> {
    // Header row
    let mut header = row![].spacing(0).align_y(Alignment::Center);
    for col in columns {
        let label = text(col.header.clone()).size(12).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }
        });

        let content: Element<'a, M> = match col.sort_id {
            Some(id) => {
                let mut inner = row![label].spacing(4.0).align_y(Alignment::Center);
                if sort.column() == Some(id) {
                    let chevron = match sort.order() {
                        SortOrder::Ascending => lucide::chevron_up().size(12),
                        SortOrder::Descending => lucide::chevron_down().size(12),
                    };
                    inner = inner.push(chevron);
                }
                button(inner)
                    .on_press(on_sort(id))
                    .padding(0.0)
                    .style(button::text)
                    .into()
            }
            None => label.into(),
        };

        header = header.push(
            container(content)
                .width(col.width)
                .padding(TABLE_CELL_PADDING)
                .style(table_header),
        );
    }

    // Data rows
    let mut body = column![].spacing(0);
    for cells in rows {
        let mut data_row = row![].spacing(0).align_y(Alignment::Center);
        for (idx, cell) in cells.into_iter().enumerate() {
            let width = columns.get(idx).map(|c| c.width).unwrap_or(Length::Fill);
            data_row = data_row.push(
                container(cell)
                    .width(width)
                    .padding(TABLE_CELL_PADDING),
            );
        }
        body = body.push(data_row).push(rule::horizontal(1));
    }

    column![header, scrollable(body).height(Length::Fill)].into()
}
