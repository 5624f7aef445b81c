#![allow(missing_docs)]

use bazaar_api::form::{EncodedField, FilePart, encode_fields};
use serde_json::{Map, Value, json};

fn payload(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("payload must be an object"),
    }
}

fn text_value<'a>(fields: &'a [EncodedField], name: &str) -> Option<&'a str> {
    fields.iter().find_map(|f| match f {
        EncodedField::Text { name: n, value } if n == name => Some(value.as_str()),
        _ => None,
    })
}

#[test]
fn test_update_without_image_keeps_it_server_side() {
    // Editing only the title of a brand must not emit any logo field: the
    // backend keeps the stored logo when the field is absent.
    let fields = encode_fields(
        &payload(json!({
            "name": "Golestan",
            "logo": null,
            "logoFile": null,
            "logoFilePreview": "preview-7",
        })),
        &[],
    );
    assert_eq!(fields.len(), 1);
    assert_eq!(text_value(&fields, "name"), Some("Golestan"));
}

#[test]
fn test_tag_lists_travel_as_json_strings() {
    let fields = encode_fields(
        &payload(json!({"title": "A", "tags": ["x", "y"]})),
        &[],
    );
    assert_eq!(text_value(&fields, "tags"), Some(r#"["x","y"]"#));
    assert_eq!(text_value(&fields, "title"), Some("A"));
}

#[test]
fn test_replacing_an_image_sends_exactly_one_file_part() {
    let attachment = FilePart {
        field: "coverImageFile".to_string(),
        file_name: "hero.jpg".to_string(),
        mime: "image/jpeg".to_string(),
        bytes: vec![1, 2, 3],
    };
    let fields = encode_fields(
        &payload(json!({"title": "Summer", "active": true})),
        &[attachment],
    );

    let file_parts: Vec<_> = fields
        .iter()
        .filter(|f| matches!(f, EncodedField::File { .. }))
        .collect();
    assert_eq!(file_parts.len(), 1);
    assert_eq!(
        file_parts[0],
        &EncodedField::File {
            name: "coverImageFile".to_string(),
            file_name: "hero.jpg".to_string(),
            len: 3,
        }
    );
    assert_eq!(text_value(&fields, "active"), Some("true"));
}
