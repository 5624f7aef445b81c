//! Multipart form assembly for file-carrying resources.
//!
//! The rules mirror what the backend expects from the storefront admin:
//!
//! - absent (null) values are skipped entirely;
//! - `*Preview` fields are client-side transients and never leave the app;
//! - the designated file fields are included only when an actual file
//!   payload is attached; an unset file field is omitted so a text-only
//!   update cannot clear a persisted image URL on the server;
//! - arrays are sent as one JSON-serialized string part;
//! - booleans are sent as `"true"`/`"false"`.
//!
//! Encoding happens in two stages so the rules stay testable: payloads
//! flatten to [`EncodedField`]s first, and only then become a
//! `reqwest::multipart::Form`.

use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Field names that carry file attachments.
pub const FILE_FIELDS: [&str; 3] = ["imageFile", "logoFile", "coverImageFile"];

/// Suffix marking a field as a transient client-side preview.
pub const PREVIEW_SUFFIX: &str = "Preview";

/// A file attachment destined for one of the [`FILE_FIELDS`].
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// One encoded multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedField {
    Text { name: String, value: String },
    File { name: String, file_name: String, len: usize },
}

impl EncodedField {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Flatten a payload map plus attachments into encoded fields.
pub fn encode_fields(payload: &Map<String, Value>, files: &[FilePart]) -> Vec<EncodedField> {
    let mut fields = Vec::new();

    for (name, value) in payload {
        if value.is_null() {
            continue;
        }
        if name.ends_with(PREVIEW_SUFFIX) {
            continue;
        }
        if FILE_FIELDS.contains(&name.as_str()) {
            // File content travels through `files`; a bare value here would
            // overwrite the persisted URL with garbage.
            continue;
        }
        let text = match value {
            Value::Array(_) | Value::Object(_) => value.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => unreachable!("null handled above"),
        };
        fields.push(EncodedField::Text {
            name: name.clone(),
            value: text,
        });
    }

    for file in files {
        fields.push(EncodedField::File {
            name: file.field.clone(),
            file_name: file.file_name.clone(),
            len: file.bytes.len(),
        });
    }

    fields
}

/// Build the wire form. Consumes the attachments.
pub fn build_form(payload: &Map<String, Value>, files: Vec<FilePart>) -> Result<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();

    for field in encode_fields(payload, &[]) {
        if let EncodedField::Text { name, value } = field {
            form = form.text(name, value);
        }
    }

    for file in files {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)
            .map_err(|e| ApiError::Decode(format!("invalid mime type: {e}")))?;
        form = form.part(file.field, part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[test]
    fn skips_null_files_and_previews() {
        let fields = encode_fields(
            &payload(json!({
                "title": "A",
                "tags": ["x", "y"],
                "imageFile": null,
                "imageFilePreview": "blob:1",
            })),
            &[],
        );

        let names: Vec<_> = fields.iter().map(EncodedField::name).collect();
        assert_eq!(names, ["tags", "title"]);
        assert!(fields.contains(&EncodedField::Text {
            name: "tags".to_string(),
            value: r#"["x","y"]"#.to_string(),
        }));
    }

    #[test]
    fn file_field_only_with_attachment() {
        // A text-only update must not clear the persisted image.
        let without = encode_fields(&payload(json!({"title": "B", "imageFile": "stale"})), &[]);
        assert_eq!(without.iter().map(EncodedField::name).collect::<Vec<_>>(), ["title"]);

        let with = encode_fields(
            &payload(json!({"title": "B"})),
            &[FilePart {
                field: "imageFile".to_string(),
                file_name: "cover.png".to_string(),
                mime: "image/png".to_string(),
                bytes: vec![0u8; 4],
            }],
        );
        assert_eq!(
            with,
            vec![
                EncodedField::Text { name: "title".to_string(), value: "B".to_string() },
                EncodedField::File {
                    name: "imageFile".to_string(),
                    file_name: "cover.png".to_string(),
                    len: 4,
                },
            ]
        );
    }

    #[test]
    fn booleans_and_numbers_stringify() {
        let fields = encode_fields(
            &payload(json!({"isActive": true, "order": 3, "discount": 1.5})),
            &[],
        );
        assert!(fields.contains(&EncodedField::Text {
            name: "isActive".to_string(),
            value: "true".to_string(),
        }));
        assert!(fields.contains(&EncodedField::Text {
            name: "order".to_string(),
            value: "3".to_string(),
        }));
        assert!(fields.contains(&EncodedField::Text {
            name: "discount".to_string(),
            value: "1.5".to_string(),
        }));
    }
}
