use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Title stored when a note is created without one.
pub const DEFAULT_TITLE: &str = "untitled";

// Present keys (even `null`) become `Some`; only a missing key stays `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A stored note. `id` and `created_at` never change after creation.
///
/// `title`, `tags` and `body` hold whatever JSON the client sent; a field the
/// client left out is `None` and omitted on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(with = "crate::time_serde")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::time_serde")]
    pub updated_at: DateTime<Utc>,
}

/// Create input. Only a missing title is defaulted; everything else is kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Update input. Written through verbatim: a missing title stays missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteChanges {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl Note {
    pub(crate) fn from_new(id: String, input: NewNote, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: Some(input.title.unwrap_or_else(|| Value::from(DEFAULT_TITLE))),
            tags: input.tags,
            body: input.body,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn apply(&mut self, changes: NoteChanges, now: DateTime<Utc>) {
        self.title = changes.title;
        self.tags = changes.tags;
        self.body = changes.body;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_uses_camel_case_and_omits_absent_fields() {
        let now = Utc::now();
        let note = Note::from_new("abc".into(), NewNote { body: Some(json!("b")), ..Default::default() }, now);
        let v = serde_json::to_value(&note).unwrap();
        assert_eq!(v["title"], "untitled");
        assert_eq!(v["body"], "b");
        assert!(v.get("tags").is_none());
        assert_eq!(v["createdAt"], v["updatedAt"]);
    }

    #[test]
    fn explicit_null_title_is_kept_on_create() {
        let input: NewNote = serde_json::from_str(r#"{"title":null,"tags":["x"],"body":"b"}"#).unwrap();
        assert_eq!(input.title, Some(Value::Null));

        let note = Note::from_new("abc".into(), input, Utc::now());
        assert_eq!(note.title, Some(Value::Null));
        let v = serde_json::to_value(&note).unwrap();
        assert_eq!(v.get("title"), Some(&Value::Null));
    }

    #[test]
    fn fields_of_any_json_shape_are_accepted() {
        let input: NewNote = serde_json::from_str(r#"{"title":7,"tags":"x","body":{"k":[1]}}"#).unwrap();
        assert_eq!(input.title, Some(json!(7)));
        assert_eq!(input.tags, Some(json!("x")));
        assert_eq!(input.body, Some(json!({"k": [1]})));
    }

    #[test]
    fn apply_keeps_identity_and_creation_time() {
        let created = Utc::now();
        let mut note = Note::from_new("abc".into(), NewNote::default(), created);
        let later = created + chrono::Duration::seconds(5);
        note.apply(NoteChanges { title: None, tags: Some(json!(["y"])), body: Some(Value::Null) }, later);
        assert_eq!(note.id, "abc");
        assert_eq!(note.created_at, created);
        assert_eq!(note.updated_at, later);
        assert_eq!(note.title, None);
        assert_eq!(note.tags, Some(json!(["y"])));

        let v = serde_json::to_value(&note).unwrap();
        assert!(v.get("title").is_none());
        assert_eq!(v.get("body"), Some(&Value::Null));
    }

    #[test]
    fn payloads_tolerate_missing_fields() {
        let input: NewNote = serde_json::from_str(r#"{"tags":["x"]}"#).unwrap();
        assert_eq!(input.title, None);
        assert_eq!(input.body, None);
        let changes: NoteChanges = serde_json::from_str("{}").unwrap();
        assert_eq!(changes, NoteChanges::default());
    }

    #[test]
    fn stored_note_round_trips_null_and_absent_fields() {
        let raw = r#"{"id":"abc","title":null,"createdAt":"2023-01-01T00:00:00.000Z","updatedAt":"2023-01-01T00:00:00.000Z"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.title, Some(Value::Null));
        assert_eq!(note.tags, None);
        assert_eq!(serde_json::to_string(&note).unwrap(), raw);
    }
}
