//! Dialog draft state and attachment previews.
//!
//! A [`DraftForm`] is the uncommitted copy of one entity while its dialog is
//! open: seeded by merging an existing record over the resource's empty
//! template, discarded on cancel or successful submit, never partially
//! persisted.
//!
//! Attachment previews are decoded image handles held in a [`PreviewStore`].
//! They are scoped resources, not garbage: each acquisition must be released
//! exactly once, when the file is replaced, cleared, reverted to a URL, or
//! when the draft is discarded. The store rejects (and logs) double release,
//! and [`DraftForm::discard`] is the single teardown path that guarantees
//! nothing stays behind.

use std::collections::BTreeMap;

use iced::widget::image;
use serde_json::{Map, Number, Value};

use bazaar_api::FilePart;
use bazaar_model::{Record, RecordId, Resource};

use crate::message::PickedFile;
use crate::resource::{FieldKind, spec};

// =============================================================================
// PREVIEW STORE
// =============================================================================

/// Handle to one decoded attachment preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

/// Owner of all live attachment previews.
#[derive(Debug, Default)]
pub struct PreviewStore {
    next: u64,
    alive: BTreeMap<u64, image::Handle>,
    released: u64,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode bytes into a preview handle and register it.
    pub fn acquire(&mut self, bytes: Vec<u8>) -> PreviewId {
        let id = self.next;
        self.next += 1;
        self.alive.insert(id, image::Handle::from_bytes(bytes));
        tracing::debug!(preview = id, alive = self.alive.len(), "preview acquired");
        PreviewId(id)
    }

    /// Release a preview. Exactly once per acquisition: a second release of
    /// the same id is a bug and is rejected.
    pub fn release(&mut self, id: PreviewId) -> Result<(), PreviewId> {
        match self.alive.remove(&id.0) {
            Some(_) => {
                self.released += 1;
                tracing::debug!(preview = id.0, alive = self.alive.len(), "preview released");
                Ok(())
            }
            None => {
                tracing::warn!(preview = id.0, "double release of attachment preview");
                Err(id)
            }
        }
    }

    pub fn get(&self, id: PreviewId) -> Option<&image::Handle> {
        self.alive.get(&id.0)
    }

    /// Number of live previews; zero once every dialog is closed.
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Total successful releases (test observability).
    pub fn released_count(&self) -> u64 {
        self.released
    }
}

// =============================================================================
// DRAFT FORM
// =============================================================================

/// One attachment field of a draft: either a freshly picked file (with its
/// preview) or a URL-based value, never both.
#[derive(Debug, Default)]
pub struct FileSlot {
    pub picked: Option<PickedFile>,
    pub preview: Option<PreviewId>,
    pub url: String,
}

/// Uncommitted field values for one entity being created or edited.
#[derive(Debug)]
pub struct DraftForm {
    resource: Resource,
    /// `Some` when editing an existing entity.
    pub editing: Option<RecordId>,
    texts: BTreeMap<&'static str, String>,
    flags: BTreeMap<&'static str, bool>,
    files: BTreeMap<&'static str, FileSlot>,
}

impl DraftForm {
    /// Empty template for a create dialog.
    pub fn create(resource: Resource) -> Self {
        Self::seed(resource, None)
    }

    /// Template merged under an existing record for an edit dialog: fields
    /// the record lacks keep their template defaults.
    pub fn edit(resource: Resource, record: &Record) -> Self {
        Self::seed(resource, Some(record))
    }

    fn seed(resource: Resource, record: Option<&Record>) -> Self {
        let mut draft = Self {
            resource,
            editing: record.map(|r| r.id().clone()),
            texts: BTreeMap::new(),
            flags: BTreeMap::new(),
            files: BTreeMap::new(),
        };

        for field in spec(resource).fields {
            match field.kind {
                FieldKind::Flag => {
                    let value = match record.and_then(|r| r.value(field.name)) {
                        Some(_) => record.is_some_and(|r| r.flag(field.name)),
                        None => field.flag_default,
                    };
                    draft.flags.insert(field.name, value);
                }
                FieldKind::File { url_field } => {
                    let url = record.map(|r| r.text(url_field)).unwrap_or_default();
                    draft.files.insert(
                        field.name,
                        FileSlot {
                            url,
                            ..FileSlot::default()
                        },
                    );
                }
                FieldKind::Tags => {
                    let value = match record.and_then(|r| r.value(field.name)) {
                        Some(Value::Array(items)) => items
                            .iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                        Some(_) => record.map(|r| r.text(field.name)).unwrap_or_default(),
                        None => field.default.to_string(),
                    };
                    draft.texts.insert(field.name, value);
                }
                FieldKind::Text
                | FieldKind::Multiline
                | FieldKind::Number
                | FieldKind::Select(_) => {
                    let value = match record.and_then(|r| r.value(field.name)) {
                        Some(_) => record.map(|r| r.text(field.name)).unwrap_or_default(),
                        None => field.default.to_string(),
                    };
                    draft.texts.insert(field.name, value);
                }
            }
        }
        draft
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn text(&self, field: &str) -> &str {
        self.texts.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn flag(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }

    pub fn file(&self, field: &str) -> Option<&FileSlot> {
        self.files.get(field)
    }

    pub fn set_text(&mut self, field: &'static str, value: String) {
        self.texts.insert(field, value);
    }

    pub fn set_flag(&mut self, field: &'static str, value: bool) {
        self.flags.insert(field, value);
    }

    // -------------------------------------------------------------------------
    // Attachment transitions
    // -------------------------------------------------------------------------

    /// A new file was picked: the previous preview (if any) is released,
    /// the new one acquired, and any URL-based value cleared.
    pub fn attach_file(&mut self, field: &'static str, file: PickedFile, store: &mut PreviewStore) {
        let slot = self.files.entry(field).or_default();
        if let Some(old) = slot.preview.take() {
            let _ = store.release(old);
        }
        slot.preview = Some(store.acquire(file.bytes.clone()));
        slot.picked = Some(file);
        slot.url.clear();
    }

    /// The attachment was explicitly cleared: preview released, value left
    /// empty (forcing re-upload or explicit URL entry).
    pub fn clear_file(&mut self, field: &'static str, store: &mut PreviewStore) {
        if let Some(slot) = self.files.get_mut(field) {
            if let Some(old) = slot.preview.take() {
                let _ = store.release(old);
            }
            slot.picked = None;
            slot.url.clear();
        }
    }

    /// The user typed a URL instead: any pending file and its preview are
    /// dropped in favor of the URL-based value.
    pub fn set_file_url(&mut self, field: &'static str, url: String, store: &mut PreviewStore) {
        let slot = self.files.entry(field).or_default();
        if let Some(old) = slot.preview.take() {
            let _ = store.release(old);
        }
        slot.picked = None;
        slot.url = url;
    }

    /// Tear the draft down, releasing every live preview. The only way a
    /// draft should ever be dropped.
    pub fn discard(mut self, store: &mut PreviewStore) {
        for slot in self.files.values_mut() {
            if let Some(id) = slot.preview.take() {
                let _ = store.release(id);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Validation & payload assembly
    // -------------------------------------------------------------------------

    /// Check required fields. Returns the first missing field's label.
    pub fn missing_required(&self) -> Option<&'static str> {
        for field in spec(self.resource).fields {
            if !field.required {
                continue;
            }
            let missing = match field.kind {
                FieldKind::Flag => false,
                FieldKind::File { .. } => self
                    .files
                    .get(field.name)
                    .is_none_or(|slot| slot.picked.is_none() && slot.url.trim().is_empty()),
                _ => self.text(field.name).trim().is_empty(),
            };
            if missing {
                return Some(field.label);
            }
        }
        None
    }

    /// Assemble the wire payload and attachments.
    ///
    /// Non-consuming: a server rejection must leave the dialog open with
    /// the draft (and its previews) intact for correction and resubmit.
    pub fn payload(&self) -> (Map<String, Value>, Vec<FilePart>) {
        let mut payload = Map::new();
        let mut files = Vec::new();

        for field in spec(self.resource).fields {
            match field.kind {
                FieldKind::Flag => {
                    payload.insert(field.name.to_string(), Value::Bool(self.flag(field.name)));
                }
                FieldKind::Number => {
                    let parsed: f64 = self.text(field.name).trim().parse().unwrap_or(0.0);
                    payload.insert(field.name.to_string(), number_value(parsed));
                }
                FieldKind::Tags => {
                    let tags: Vec<Value> = self
                        .text(field.name)
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(|t| Value::String(t.to_string()))
                        .collect();
                    payload.insert(field.name.to_string(), Value::Array(tags));
                }
                FieldKind::File { url_field } => {
                    if let Some(slot) = self.files.get(field.name) {
                        if let Some(picked) = &slot.picked {
                            files.push(FilePart {
                                field: field.name.to_string(),
                                file_name: picked.name.clone(),
                                mime: picked.mime.clone(),
                                bytes: picked.bytes.clone(),
                            });
                        } else if !slot.url.trim().is_empty() {
                            payload.insert(
                                url_field.to_string(),
                                Value::String(slot.url.trim().to_string()),
                            );
                        }
                    }
                }
                FieldKind::Text | FieldKind::Multiline | FieldKind::Select(_) => {
                    payload.insert(
                        field.name.to_string(),
                        Value::String(self.text(field.name).trim().to_string()),
                    );
                }
            }
        }

        (payload, files)
    }
}

fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn picked(name: &str) -> PickedFile {
        PickedFile {
            name: name.to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn edit_seeds_record_over_template() {
        let record = Record::from_value(json!({
            "id": "c1",
            "name": "Fruits",
            "isActive": true,
        }))
        .unwrap();
        let draft = DraftForm::edit(Resource::Categories, &record);

        assert_eq!(draft.text("name"), "Fruits");
        assert!(draft.flag("isActive"));
        // Template default untouched by the record.
        assert_eq!(draft.text("order"), "0");
        assert_eq!(draft.editing, Some("c1".into()));
    }

    #[test]
    fn create_uses_template_defaults() {
        let draft = DraftForm::create(Resource::Categories);
        assert_eq!(draft.text("name"), "");
        assert_eq!(draft.text("order"), "0");
        assert!(draft.flag("isActive"));
        assert!(draft.editing.is_none());
    }

    #[test]
    fn replacing_a_file_releases_the_old_preview_first() {
        let mut store = PreviewStore::new();
        let mut draft = DraftForm::create(Resource::Brands);

        draft.attach_file("logoFile", picked("a.png"), &mut store);
        assert_eq!(store.alive_count(), 1);
        assert_eq!(store.released_count(), 0);

        draft.attach_file("logoFile", picked("b.png"), &mut store);
        assert_eq!(store.alive_count(), 1, "old preview must be gone");
        assert_eq!(store.released_count(), 1);

        draft.discard(&mut store);
        assert_eq!(store.alive_count(), 0);
        assert_eq!(store.released_count(), 2);
    }

    #[test]
    fn double_release_is_rejected() {
        let mut store = PreviewStore::new();
        let id = store.acquire(vec![0u8; 2]);
        assert!(store.release(id).is_ok());
        assert!(store.release(id).is_err());
        assert_eq!(store.released_count(), 1);
    }

    #[test]
    fn reverting_to_url_releases_the_preview() {
        let mut store = PreviewStore::new();
        let mut draft = DraftForm::create(Resource::Banners);

        draft.attach_file("imageFile", picked("hero.png"), &mut store);
        draft.set_file_url("imageFile", "https://cdn.example.com/hero.png".to_string(), &mut store);

        assert_eq!(store.alive_count(), 0);
        let slot = draft.file("imageFile").unwrap();
        assert!(slot.picked.is_none());
        assert_eq!(slot.url, "https://cdn.example.com/hero.png");
        draft.discard(&mut store);
    }

    #[test]
    fn payload_assembly_applies_field_kinds() {
        let mut draft = DraftForm::create(Resource::Products);
        draft.set_text("name", " Apple ".to_string());
        draft.set_text("price", "12".to_string());
        draft.set_text("tags", "fresh, fruit ,".to_string());
        draft.set_flag("isFeatured", true);

        let (payload, files) = draft.payload();
        assert!(files.is_empty());
        assert_eq!(payload["name"], json!("Apple"));
        assert_eq!(payload["price"], json!(12));
        assert_eq!(payload["tags"], json!(["fresh", "fruit"]));
        assert_eq!(payload["isFeatured"], json!(true));
        // Unset number fields coerce to 0, like the backend expects.
        assert_eq!(payload["originalPrice"], json!(0));
    }

    #[test]
    fn missing_required_flags_empty_name() {
        let draft = DraftForm::create(Resource::Categories);
        assert_eq!(draft.missing_required(), Some("Name"));

        let mut draft = DraftForm::create(Resource::Categories);
        draft.set_text("name", "Fruits".to_string());
        assert_eq!(draft.missing_required(), None);
    }

    #[test]
    fn banner_requires_image_url_or_file() {
        let mut store = PreviewStore::new();
        let mut draft = DraftForm::create(Resource::Banners);
        draft.set_text("title", "Spring".to_string());
        assert_eq!(draft.missing_required(), Some("Image"));

        draft.attach_file("imageFile", picked("spring.png"), &mut store);
        assert_eq!(draft.missing_required(), None);
        draft.discard(&mut store);
    }
}
