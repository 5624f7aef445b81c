//! Screen views.
//!
//! Views are pure functions of [`crate::state::AppState`]; all interaction
//! flows back through messages.

pub mod contact;
pub mod dashboard;
pub mod inventory;
pub mod login;
pub mod orders;
pub mod resource;

use iced::Element;

use bazaar_model::Resource;

use crate::message::Message;
use crate::state::{AppState, Screen};

/// Render the active screen (assumes a signed-in session).
pub fn view_screen(state: &AppState) -> Element<'_, Message> {
    match state.screen {
        Screen::Dashboard => dashboard::view_dashboard(state),
        Screen::Resource(Resource::Inventory) => inventory::view_inventory(state),
        Screen::Resource(Resource::Orders) => orders::view_orders(state),
        Screen::Resource(Resource::Contact) => contact::view_contact(state),
        Screen::Resource(resource) => resource::view_resource(state, resource),
    }
}
