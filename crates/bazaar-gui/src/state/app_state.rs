//! Application-level state.
//!
//! `AppState` is the root of all state. Everything the views render and the
//! handlers mutate lives here; no state hides inside widgets.

use std::collections::BTreeMap;

use bazaar_model::Resource;
use bazaar_query::{QueryCache, QueryKey};

use crate::config::Settings;

use super::draft::PreviewStore;
use super::page::PageState;
use super::session::SessionState;
use super::toast::ToastChannel;

/// The active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Resource(Resource),
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Resource(resource) => crate::resource::spec(resource).title,
        }
    }
}

/// Resources the dashboard aggregates.
pub const DASHBOARD_RESOURCES: [Resource; 4] = [
    Resource::Products,
    Resource::Orders,
    Resource::Users,
    Resource::Blogs,
];

/// Top-level application state.
pub struct AppState {
    pub screen: Screen,
    pub session: SessionState,
    pub cache: QueryCache,
    pub pages: BTreeMap<Resource, PageState>,
    pub previews: PreviewStore,
    pub toast: ToastChannel,
    pub settings: Settings,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::Dashboard,
            session: SessionState::default(),
            cache: QueryCache::new(),
            pages: BTreeMap::new(),
            previews: PreviewStore::new(),
            toast: ToastChannel::default(),
            settings,
        }
    }

    /// Page state for a resource, created on first visit.
    pub fn page_mut(&mut self, resource: Resource) -> &mut PageState {
        self.pages
            .entry(resource)
            .or_insert_with(|| PageState::new(resource))
    }

    pub fn page(&self, resource: Resource) -> Option<&PageState> {
        self.pages.get(&resource)
    }

    /// Cache keys the given screen reads.
    pub fn screen_keys(&mut self, screen: Screen) -> Vec<QueryKey> {
        match screen {
            Screen::Dashboard => DASHBOARD_RESOURCES
                .iter()
                .map(|&r| QueryKey::bare(r))
                .collect(),
            Screen::Resource(resource) => vec![self.page_mut(resource).query_key()],
        }
    }
}
