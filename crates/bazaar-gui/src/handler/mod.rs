//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and is
//! dispatched from `App::update`. Handlers receive the shared [`ApiClient`]
//! so they can spawn background tasks; all state mutation stays synchronous
//! and in here.

mod dialog;
mod mutation;
mod page;
mod query;
mod session;
mod toast;

use std::sync::Arc;

use iced::Task;

use bazaar_api::ApiClient;
use bazaar_model::Resource;
use bazaar_query::{QueryKey, ReadPlan};

use crate::message::Message;
use crate::service;
use crate::state::{AppState, PageExtra, Screen};

pub use dialog::DialogHandler;
pub use mutation::{MutationDone, MutationHandler};
pub use page::PageHandler;
pub use query::{FetchDone, QueryHandler};
pub use session::SessionHandler;
pub use toast::ToastHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Handlers mutate [`AppState`] and may return a follow-up task; the shared
/// API client is the only context they receive beyond state.
pub trait MessageHandler<M> {
    fn handle(&self, state: &mut AppState, msg: M, api: &Arc<ApiClient>) -> Task<Message>;
}

/// Switch screens: unmount the old screen's queries, mount the new ones,
/// and start whatever fetches the cache asks for.
pub fn navigate(state: &mut AppState, api: &Arc<ApiClient>, screen: Screen) -> Task<Message> {
    let old_keys = state.screen_keys(state.screen);
    for key in &old_keys {
        state.cache.unmount(key);
    }

    state.screen = screen;
    tracing::debug!(screen = screen.title(), "navigate");

    let new_keys = state.screen_keys(screen);
    let mut tasks = Vec::new();
    for key in &new_keys {
        state.cache.mount(key);
        tasks.push(read_key(state, api, key));
    }

    // The orders screen needs the status vocabulary once.
    if screen == Screen::Resource(Resource::Orders) {
        let missing = matches!(
            &state.page_mut(Resource::Orders).extra,
            PageExtra::Orders { statuses } if statuses.is_empty()
        );
        if missing {
            tasks.push(service::fetch_order_statuses(api.clone()));
        }
    }

    Task::batch(tasks)
}

/// Ask the cache about a key and start a fetch when told to.
pub fn read_key(state: &mut AppState, api: &Arc<ApiClient>, key: &QueryKey) -> Task<Message> {
    match state.cache.plan_read(key) {
        ReadPlan::Fetch(ticket) => service::fetch_list(api.clone(), ticket),
        ReadPlan::Fresh | ReadPlan::Pending => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use bazaar_api::ApiConfig;
    use bazaar_model::{Record, SortOrder};
    use serde_json::json;

    use super::*;
    use crate::config::Settings;
    use crate::message::{DialogMessage, MutationKind, PageMessage, PickedFile};
    use crate::state::ToastKind;

    fn test_app() -> (AppState, Arc<ApiClient>) {
        let state = AppState::with_settings(Settings::default());
        let api = Arc::new(
            ApiClient::new(&ApiConfig {
                base_url: "http://localhost:9".to_string(),
            })
            .expect("client"),
        );
        (state, api)
    }

    /// Drive a fetch to completion so a page has data to work with.
    fn seed_list(state: &mut AppState, resource: Resource, records: Vec<Record>) {
        let key = state.page_mut(resource).query_key();
        state.cache.mount(&key);
        let ticket = match state.cache.plan_read(&key) {
            ReadPlan::Fetch(ticket) => ticket,
            other => panic!("expected fetch, got {other:?}"),
        };
        state.cache.complete(&ticket, Ok(records));
    }

    fn picked(name: &str) -> PickedFile {
        PickedFile {
            name: name.to_string(),
            mime: "image/png".to_string(),
            bytes: vec![0u8; 8],
        }
    }

    #[test]
    fn navigation_mounts_and_deduplicates() {
        let (mut state, api) = test_app();
        let _task = navigate(&mut state, &api, Screen::Resource(Resource::Categories));

        // The navigate started a fetch: a second reader is deduplicated.
        let key = state.page_mut(Resource::Categories).query_key();
        assert_eq!(state.cache.plan_read(&key), ReadPlan::Pending);
    }

    #[test]
    fn sort_request_toggles_direction() {
        let (mut state, api) = test_app();
        let resource = Resource::Categories;
        for _ in 0..2 {
            let _ = PageHandler.handle(
                &mut state,
                (resource, PageMessage::SortRequested("name")),
                &api,
            );
        }
        let sort = &state.page_mut(resource).sort;
        assert_eq!(sort.column(), Some("name"));
        assert_eq!(sort.order(), SortOrder::Descending);
    }

    #[test]
    fn cancel_releases_dialog_previews() {
        let (mut state, api) = test_app();
        let resource = Resource::Brands;

        let _ = PageHandler.handle(&mut state, (resource, PageMessage::NewClicked), &api);
        let _ = DialogHandler.handle(
            &mut state,
            (
                resource,
                DialogMessage::FilePicked("logoFile", Some(picked("a.png"))),
            ),
            &api,
        );
        assert_eq!(state.previews.alive_count(), 1);

        let _ = DialogHandler.handle(&mut state, (resource, DialogMessage::Cancel), &api);
        assert!(state.page_mut(resource).dialog.is_none());
        assert_eq!(state.previews.alive_count(), 0);
        assert_eq!(state.previews.released_count(), 1);
    }

    #[test]
    fn validation_failure_never_reaches_the_network() {
        let (mut state, api) = test_app();
        let resource = Resource::Categories;

        let _ = PageHandler.handle(&mut state, (resource, PageMessage::NewClicked), &api);
        let _ = DialogHandler.handle(&mut state, (resource, DialogMessage::Submit), &api);

        // Warning toast, no in-flight mutation, dialog still open.
        let toast = state.toast.current().expect("warning toast");
        assert_eq!(toast.kind, ToastKind::Warning);
        assert!(!state.page_mut(resource).busy);
        assert!(state.page_mut(resource).dialog.is_some());
    }

    #[test]
    fn mutation_failure_keeps_the_dialog_open() {
        let (mut state, api) = test_app();
        let resource = Resource::Categories;

        let _ = PageHandler.handle(&mut state, (resource, PageMessage::NewClicked), &api);
        state.page_mut(resource).busy = true;

        let _ = MutationHandler.handle(
            &mut state,
            MutationDone {
                resource,
                kind: MutationKind::Create,
                result: Err("name already exists".to_string()),
            },
            &api,
        );

        assert!(state.page_mut(resource).dialog.is_some(), "draft intact");
        assert!(!state.page_mut(resource).busy);
        let toast = state.toast.current().expect("error toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "name already exists");
    }

    #[test]
    fn mutation_success_closes_and_invalidates() {
        let (mut state, api) = test_app();
        let resource = Resource::Categories;
        seed_list(
            &mut state,
            resource,
            vec![Record::from_value(json!({"id": "1", "name": "Fruits"})).unwrap()],
        );

        let _ = PageHandler.handle(&mut state, (resource, PageMessage::NewClicked), &api);
        let _ = MutationHandler.handle(
            &mut state,
            MutationDone {
                resource,
                kind: MutationKind::Create,
                result: Ok(()),
            },
            &api,
        );

        assert!(state.page_mut(resource).dialog.is_none());
        let toast = state.toast.current().expect("success toast");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Category created");

        // The refetch is already in flight for the mounted key.
        let key = state.page_mut(resource).query_key();
        assert_eq!(state.cache.plan_read(&key), ReadPlan::Pending);
    }

    #[test]
    fn inventory_adjust_requires_a_quantity() {
        let (mut state, api) = test_app();
        let id: bazaar_model::RecordId = "p1".into();

        let _ = PageHandler.handle(
            &mut state,
            (Resource::Inventory, PageMessage::AdjustSubmitted(id)),
            &api,
        );

        let toast = state.toast.current().expect("warning toast");
        assert_eq!(toast.kind, ToastKind::Warning);
        assert!(!state.page_mut(Resource::Inventory).busy);
    }

    #[test]
    fn edit_click_seeds_dialog_from_cached_record() {
        let (mut state, api) = test_app();
        let resource = Resource::Categories;
        seed_list(
            &mut state,
            resource,
            vec![
                Record::from_value(json!({"id": "c1", "name": "Fruits", "order": 3, "isActive": false}))
                    .unwrap(),
            ],
        );

        let _ = PageHandler.handle(
            &mut state,
            (resource, PageMessage::EditClicked("c1".into())),
            &api,
        );

        let page = state.page_mut(resource);
        let draft = page.dialog.as_ref().expect("dialog open");
        assert_eq!(draft.editing, Some("c1".into()));
        assert_eq!(draft.text("name"), "Fruits");
        assert_eq!(draft.text("order"), "3");
        assert!(!draft.flag("isActive"));
    }
}
