//! Dashboard screen: stat cards over the cached lists.
//!
//! One canonical composition: counts for the four headline collections plus
//! total revenue. No charts; the numbers come straight from the same query
//! cache the resource screens read.

use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};

use bazaar_model::Resource;
use bazaar_query::QueryKey;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, card};

/// Render the dashboard.
pub fn view_dashboard(state: &AppState) -> Element<'_, Message> {
    let products = count(state, Resource::Products);
    let orders = count(state, Resource::Orders);
    let users = count(state, Resource::Users);
    let blogs = count(state, Resource::Blogs);

    let revenue: f64 = state
        .cache
        .records(&QueryKey::bare(Resource::Orders))
        .map(|records| records.iter().map(|r| r.number("total")).sum())
        .unwrap_or(0.0);

    let cards = row![
        stat_card("Products", products),
        stat_card("Orders", orders),
        stat_card("Users", users),
        stat_card("Blog posts", blogs),
    ]
    .spacing(SPACING_MD);

    let revenue_card = stat_card("Total revenue", format!("{revenue:.0}"));

    column![
        text("Dashboard").size(22),
        cards,
        row![revenue_card].spacing(SPACING_MD),
    ]
    .spacing(SPACING_MD)
    .padding(SPACING_MD)
    .into()
}

fn count(state: &AppState, resource: Resource) -> String {
    state
        .cache
        .records(&QueryKey::bare(resource))
        .map(|records| records.len().to_string())
        .unwrap_or_else(|| "...".to_string())
}

fn stat_card<'a>(label: &'a str, value: impl Into<String>) -> Element<'a, Message> {
    let content = column![
        text(value.into()).size(28),
        text(label).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        }),
    ]
    .spacing(SPACING_SM);

    container(content)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(card)
        .into()
}
