//! Tagged JSON field values.
//!
//! The backend is inconsistent about encoding: the same logical field may
//! arrive as a structured object, a JSON-encoded string, or plain text.
//! [`JsonField`] keeps that distinction explicit so consumers pattern-match
//! instead of probing runtime types, and collapses to a single display
//! value only at the serialization boundary.

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

/// A field that either parsed as JSON or stayed raw text.
///
/// The raw form is never discarded: when a structured parse cannot be
/// trusted, the original string is kept unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonField {
    /// Successfully parsed JSON value.
    Parsed(Value),
    /// Unparseable text, preserved verbatim.
    Raw(String),
}

impl JsonField {
    /// An empty structured object (`{}`).
    pub fn empty_object() -> Self {
        JsonField::Parsed(Value::Object(serde_json::Map::new()))
    }

    /// Attempt a JSON parse of `text`, keeping the original on failure.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => JsonField::Parsed(value),
            Err(_) => JsonField::Raw(text.to_string()),
        }
    }

    /// Whether this field holds a parsed value.
    pub fn is_parsed(&self) -> bool {
        matches!(self, JsonField::Parsed(_))
    }

    /// Look up a key on a parsed object. `None` for raw text and
    /// non-object values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            JsonField::Parsed(value) => value.get(key),
            JsonField::Raw(_) => None,
        }
    }

    /// Boolean flag lookup; missing or non-boolean reads as `false`.
    pub fn bool_flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Collapse to the text shown to users: raw text as-is, parsed strings
    /// without quotes, anything structured as pretty-printed JSON.
    pub fn display_text(&self) -> String {
        match self {
            JsonField::Raw(text) => text.clone(),
            JsonField::Parsed(Value::String(text)) => text.clone(),
            JsonField::Parsed(value) => serde_json::to_string_pretty(value).unwrap_or_default(),
        }
    }
}

impl Serialize for JsonField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonField::Parsed(value) => value.serialize(serializer),
            JsonField::Raw(text) => serializer.serialize_str(text),
        }
    }
}
