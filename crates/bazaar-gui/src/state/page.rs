//! Per-screen state for one resource.

use std::collections::BTreeMap;

use bazaar_api::InventoryOp;
use bazaar_model::{ListParams, Record, RecordId, Resource, SortState};
use bazaar_query::QueryKey;

use super::draft::DraftForm;

/// Pending delete confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub id: RecordId,
    /// Entity label shown in the confirmation text.
    pub label: String,
    /// Orders only: restock products when deleting.
    pub restock: bool,
}

/// Inline inventory adjustment row state.
#[derive(Debug, Clone)]
pub struct InventoryEdit {
    pub quantity: String,
    pub op: InventoryOp,
}

impl Default for InventoryEdit {
    fn default() -> Self {
        Self {
            quantity: String::new(),
            op: InventoryOp::Set,
        }
    }
}

/// Contact reply dialog draft.
#[derive(Debug, Clone)]
pub struct ReplyDraft {
    pub id: RecordId,
    pub message: String,
}

/// User notification dialog draft.
#[derive(Debug, Clone)]
pub struct NotifyDraft {
    pub id: RecordId,
    pub title: String,
    pub body: String,
}

/// Screen-specific state beyond the common table/dialog machinery.
#[derive(Debug, Default)]
pub enum PageExtra {
    #[default]
    None,
    Inventory {
        edits: BTreeMap<RecordId, InventoryEdit>,
    },
    Orders {
        statuses: Vec<String>,
    },
    Contact {
        status_filter: String,
        search_input: String,
        /// Search terms actually applied to the query key.
        search_applied: String,
        viewing: Option<Record>,
        reply: Option<ReplyDraft>,
    },
    Users {
        notify: Option<NotifyDraft>,
    },
}

/// State of one resource screen.
#[derive(Debug)]
pub struct PageState {
    pub resource: Resource,
    pub sort: SortState,
    pub dialog: Option<DraftForm>,
    pub confirm: Option<ConfirmDelete>,
    /// A mutation for this page is in flight.
    pub busy: bool,
    pub extra: PageExtra,
}

impl PageState {
    pub fn new(resource: Resource) -> Self {
        let extra = match resource {
            Resource::Inventory => PageExtra::Inventory {
                edits: BTreeMap::new(),
            },
            Resource::Orders => PageExtra::Orders {
                statuses: Vec::new(),
            },
            Resource::Contact => PageExtra::Contact {
                status_filter: String::new(),
                search_input: String::new(),
                search_applied: String::new(),
                viewing: None,
                reply: None,
            },
            Resource::Users => PageExtra::Users { notify: None },
            _ => PageExtra::None,
        };
        Self {
            resource,
            sort: SortState::default(),
            dialog: None,
            confirm: None,
            busy: false,
            extra,
        }
    }

    /// Filter parameters of the page's current list query.
    pub fn params(&self) -> ListParams {
        match &self.extra {
            PageExtra::Contact {
                status_filter,
                search_applied,
                ..
            } => ListParams::new()
                .set("status", status_filter.clone())
                .set("q", search_applied.clone()),
            _ => ListParams::new(),
        }
    }

    /// The cache key this page reads.
    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(self.resource, &self.params())
    }
}
